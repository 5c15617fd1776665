/// Helpers for taking fully-qualified class names apart.
pub struct ClassNames;

impl ClassNames {
    /// Namespace delimiter inside a fully-qualified class name.
    pub const DELIMITER: char = '\\';

    /// Conventional suffix carried by module (bundle) names, e.g. `FooBundle`.
    pub const MODULE_SUFFIX: &'static str = "Bundle";

    /// Drop leading delimiters: `\App\Entity\User` and `App\Entity\User` name the same class.
    pub fn trim(class_name: &str) -> &str {
        class_name.trim_start_matches(Self::DELIMITER)
    }

    /// Short class name: everything after the last delimiter.
    ///
    /// Identifiers without a delimiter are treated as having no namespace and
    /// are returned unchanged.
    pub fn short_name(class_name: &str) -> &str {
        match class_name.rfind(Self::DELIMITER) {
            Some(pos) => &class_name[pos + Self::DELIMITER.len_utf8()..],
            None => class_name,
        }
    }

    /// Namespace portion of a class name, without the trailing delimiter.
    pub fn namespace(class_name: &str) -> Option<&str> {
        let class_name = Self::trim(class_name);
        class_name
            .rfind(Self::DELIMITER)
            .map(|pos| &class_name[..pos])
    }

    /// Literal prefix test used by every prefix map, allow-list and deny-list.
    pub fn has_prefix(class_name: &str, prefix: &str) -> bool {
        !prefix.is_empty() && Self::trim(class_name).starts_with(prefix)
    }

    /// Module name without its conventional suffix: `FooBundle` -> `Foo`.
    pub fn strip_module_suffix(module_name: &str) -> &str {
        module_name
            .strip_suffix(Self::MODULE_SUFFIX)
            .unwrap_or(module_name)
    }
}
