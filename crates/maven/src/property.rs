use std::path::Path;
use tracing::warn;

use crate::version_updater::property_pattern;

/// The authoritative definition of a Maven property among a set of POM documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDefinition<'a> {
    /// Document holding the first definition
    pub path: &'a Path,
    /// Full text of that document
    pub content: &'a str,
    /// Defined value, surrounding whitespace trimmed
    pub value: &'a str,
    /// Number of documents that define the property, including the first
    pub definitions: usize,
}

/// Find the first document in iteration order that defines `<name>...</name>`.
///
/// Every document is scanned so that `definitions` reports how many of them define the property.
/// More than one definition is ambiguous for Maven and is logged, but the first still wins.
pub fn find_property_definition<'a>(
    documents: impl IntoIterator<Item = (&'a Path, &'a str)>,
    name: &str,
) -> Option<PropertyDefinition<'a>> {
    let pattern = property_pattern(name)?;
    let mut first: Option<PropertyDefinition<'a>> = None;
    let mut definitions = 0;

    for (path, content) in documents {
        let Some(value) = pattern.captures(content).and_then(|caps| caps.get(2)) else {
            continue;
        };
        definitions += 1;
        if first.is_none() {
            first = Some(PropertyDefinition {
                path,
                content,
                value: value.as_str().trim(),
                definitions: 0,
            });
        }
    }

    if definitions > 1 {
        warn!("Property {name} is defined in {definitions} POM files, using the first one");
    }
    first.map(|definition| PropertyDefinition {
        definitions,
        ..definition
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: &str = "<project><properties><version.cui.http>1.5.0</version.cui.http></properties></project>";
    const BOM: &str = "<project>\n  <properties>\n    <version.cui.http> 1.4.0 </version.cui.http>\n  </properties>\n</project>";
    const EMPTY: &str = "<project><properties></properties></project>";

    #[test]
    fn test_find_property_definition_first_wins() {
        let documents = [
            (Path::new("/repo/bom/pom.xml"), BOM),
            (Path::new("/repo/pom.xml"), ROOT),
        ];
        let definition = find_property_definition(documents, "version.cui.http").unwrap();
        assert_eq!(definition.path, Path::new("/repo/bom/pom.xml"));
        assert_eq!(definition.value, "1.4.0");
        assert_eq!(definition.content, BOM);
        assert_eq!(definition.definitions, 2);
    }

    #[test]
    fn test_find_property_definition_skips_documents_without_it() {
        let documents = [
            (Path::new("/repo/a/pom.xml"), EMPTY),
            (Path::new("/repo/pom.xml"), ROOT),
        ];
        let definition = find_property_definition(documents, "version.cui.http").unwrap();
        assert_eq!(definition.path, Path::new("/repo/pom.xml"));
        assert_eq!(definition.value, "1.5.0");
        assert_eq!(definition.definitions, 1);
    }

    #[test]
    fn test_find_property_definition_missing() {
        let documents = [(Path::new("/repo/pom.xml"), EMPTY)];
        assert_eq!(
            find_property_definition(documents, "version.cui.http"),
            None
        );
        assert_eq!(find_property_definition(Vec::<(&Path, &str)>::new(), "version.cui.http"), None);
    }

    #[test]
    fn test_find_property_definition_ignores_references() {
        let documents = [(
            Path::new("/repo/pom.xml"),
            "<dependency><version>${version.cui.http}</version></dependency>",
        )];
        assert_eq!(
            find_property_definition(documents, "version.cui.http"),
            None
        );
    }
}
