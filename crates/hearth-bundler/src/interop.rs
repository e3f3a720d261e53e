//! Declarative named-export interop table.
//!
//! Some packages ship in a legacy module format whose named exports cannot
//! be inferred automatically; they must be declared explicitly so the
//! interop stage can wrap them into a uniform module shape. The table is
//! validated at configuration time against the suite's declared package
//! set, rather than discovered implicitly at bundle time.

use indexmap::IndexMap;

use crate::{Error, Result};

/// Allow-list of explicitly declared named exports, keyed by package.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedExportTable {
    entries: IndexMap<String, Vec<String>>,
}

impl NamedExportTable {
    /// The exceptions the suite currently needs.
    pub fn builtin() -> Self {
        Self::from_entries([("js-yaml", &["safeDump", "safeLoad"][..])])
    }

    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, &'a [&'a str])>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(package, exports)| {
                (
                    package.to_string(),
                    exports.iter().map(|e| e.to_string()).collect(),
                )
            })
            .collect();
        Self { entries }
    }

    /// Named exports declared for a package, if any.
    pub fn get(&self, package: &str) -> Option<&[String]> {
        self.entries.get(package).map(Vec::as_slice)
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fail if the table references a package absent from the declared
    /// dependency set.
    pub fn validate(&self, declared: &[String]) -> Result<()> {
        for package in self.packages() {
            if !declared.iter().any(|d| d == package) {
                return Err(Error::UnknownInteropPackage(package.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_declares_yaml_exports() {
        let table = NamedExportTable::builtin();
        assert_eq!(
            table.get("js-yaml"),
            Some(&["safeDump".to_string(), "safeLoad".to_string()][..])
        );
        assert!(table.get("lit-html").is_none());
    }

    #[test]
    fn validation_accepts_declared_packages() {
        let table = NamedExportTable::builtin();
        let declared = vec!["js-yaml".to_string(), "lit-html".to_string()];
        assert!(table.validate(&declared).is_ok());
    }

    #[test]
    fn validation_rejects_undeclared_packages() {
        let table = NamedExportTable::from_entries([("left-pad", &["pad"][..])]);
        let err = table.validate(&["js-yaml".to_string()]).unwrap_err();
        assert!(matches!(err, Error::UnknownInteropPackage(p) if p == "left-pad"));
    }
}
