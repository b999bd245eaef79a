//! Margin, padding and corner resolution
//!
//! Every resolved box record starts from an all-null baseline so a key that
//! the current input does not mention is explicitly cleared. Inputs and theme
//! entries come in three shapes: a number for every side, a record of
//! individual sides/corners, or (theme only) a table keyed by size variant
//! whose entries are themselves numbers or records.

use crate::intent::{BoxSpec, KeyedRecord, SizeVariant, THEMED};
use crate::warnings::{StyleWarning, WarningSink};
use lumen_core::{StyleRecord, StyleValue};
use lumen_theme::{Theme, ThemeError, ThemeTable, ThemeValue};
use smallvec::SmallVec;

/// Box-like attribute kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxAttr {
    Margin,
    Padding,
    Corner,
}

impl BoxAttr {
    pub fn name(self) -> &'static str {
        match self {
            BoxAttr::Margin => "margin",
            BoxAttr::Padding => "padding",
            BoxAttr::Corner => "corner",
        }
    }

    /// Global theme table holding named aliases
    pub fn alias_table(self) -> &'static str {
        match self {
            BoxAttr::Margin | BoxAttr::Padding => "spacing",
            BoxAttr::Corner => "corner",
        }
    }

    /// Property receiving a uniform value
    pub fn uniform_property(self) -> &'static str {
        match self {
            BoxAttr::Margin => "margin",
            BoxAttr::Padding => "padding",
            BoxAttr::Corner => "borderRadius",
        }
    }

    /// Record key -> property
    pub fn keyed_properties(self) -> &'static [(&'static str, &'static str)] {
        match self {
            BoxAttr::Margin => &[
                ("top", "marginTop"),
                ("bottom", "marginBottom"),
                ("left", "marginLeft"),
                ("right", "marginRight"),
                ("horizontal", "marginHorizontal"),
                ("vertical", "marginVertical"),
            ],
            BoxAttr::Padding => &[
                ("top", "paddingTop"),
                ("bottom", "paddingBottom"),
                ("left", "paddingLeft"),
                ("right", "paddingRight"),
                ("horizontal", "paddingHorizontal"),
                ("vertical", "paddingVertical"),
            ],
            BoxAttr::Corner => &[
                ("topLeft", "borderTopLeftRadius"),
                ("topRight", "borderTopRightRadius"),
                ("bottomLeft", "borderBottomLeftRadius"),
                ("bottomRight", "borderBottomRightRadius"),
            ],
        }
    }

    fn property_for(self, key: &str) -> Option<&'static str> {
        self.keyed_properties()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, p)| *p)
    }

    /// Every property of this attribute, set to null
    pub fn baseline(self) -> StyleRecord {
        std::iter::once(self.uniform_property())
            .chain(self.keyed_properties().iter().map(|(_, p)| *p))
            .map(|p| (p.to_string(), StyleValue::Null))
            .collect()
    }
}

/// `(property, value)` pairs to overlay on the baseline
type Entries = SmallVec<[(&'static str, f32); 6]>;

/// Per-size box records
#[derive(Clone, Debug, PartialEq)]
pub struct SizedRecords {
    pub small: StyleRecord,
    pub normal: StyleRecord,
    pub large: StyleRecord,
}

impl SizedRecords {
    fn uniform(record: StyleRecord) -> Self {
        Self {
            small: record.clone(),
            normal: record.clone(),
            large: record,
        }
    }

    pub fn get(&self, size: SizeVariant) -> &StyleRecord {
        match size {
            SizeVariant::Small => &self.small,
            SizeVariant::Normal => &self.normal,
            SizeVariant::Large => &self.large,
        }
    }
}

/// Where a box attribute's values come from
enum Source {
    Entries(Entries),
    PerSize([Entries; 3]),
}

pub(crate) struct BoxResolver<'a> {
    pub theme: &'a Theme,
    pub sink: &'a dyn WarningSink,
    pub kind: &'static str,
    pub defaults: &'static str,
}

impl BoxResolver<'_> {
    /// Resolve one attribute for all three size variants
    pub fn resolve<R: KeyedRecord>(
        &self,
        attr: BoxAttr,
        spec: Option<&BoxSpec<R>>,
    ) -> SizedRecords {
        let source = match spec {
            None => self.from_theme_path(attr, &format!("{}.{}", self.defaults, attr.name()), None),
            Some(BoxSpec::Alias(name)) if name == THEMED => {
                self.from_theme_path(attr, &format!("{}.{}", self.defaults, attr.name()), None)
            }
            Some(BoxSpec::Alias(name)) => self.from_theme_path(
                attr,
                &format!("{}.{}", attr.alias_table(), name),
                Some(name),
            ),
            Some(BoxSpec::Uniform(value)) => {
                Source::Entries(SmallVec::from_iter([(attr.uniform_property(), *value)]))
            }
            Some(BoxSpec::Record(record)) => Source::Entries(
                record
                    .entries()
                    .into_iter()
                    .filter_map(|(key, value)| attr.property_for(key).map(|p| (p, value)))
                    .collect(),
            ),
        };

        let overlay = |entries: &Entries| {
            let mut record = attr.baseline();
            for (property, value) in entries {
                record.insert((*property).to_string(), StyleValue::Number(*value));
            }
            record
        };

        match source {
            Source::Entries(entries) => SizedRecords::uniform(overlay(&entries)),
            Source::PerSize([small, normal, large]) => SizedRecords {
                small: overlay(&small),
                normal: overlay(&normal),
                large: overlay(&large),
            },
        }
    }

    fn from_theme_path(&self, attr: BoxAttr, path: &str, alias: Option<&str>) -> Source {
        let warning = match (self.theme.lookup(path), alias) {
            (Ok(value), _) => return self.from_theme_value(attr, value, path),
            (Err(ThemeError::MissingPath(_)), Some(name)) => StyleWarning::UnknownAlias {
                kind: self.kind,
                attr: attr.name(),
                name: name.to_string(),
            },
            (Err(err), _) => StyleWarning::Theme {
                kind: self.kind,
                reason: err.to_string(),
            },
        };
        self.sink.warn(warning);
        Source::Entries(SmallVec::from_iter([(attr.uniform_property(), 0.0)]))
    }

    fn from_theme_value(&self, attr: BoxAttr, value: &ThemeValue, path: &str) -> Source {
        match value {
            ThemeValue::Table(table) if is_per_size(table) => {
                Source::PerSize(SizeVariant::ALL.map(|size| {
                    let key = size.key();
                    let entry_path = format!("{path}.{key}");
                    match table.get(key).map(|v| self.theme.resolve_value(v, &entry_path)) {
                        Some(Ok(v)) => self.entries(attr, v, &entry_path),
                        Some(Err(err)) => {
                            self.warn_theme(err.to_string());
                            Entries::new()
                        }
                        None => {
                            self.warn_theme(format!("{entry_path} is missing"));
                            Entries::new()
                        }
                    }
                }))
            }
            other => Source::Entries(self.entries(attr, other, path)),
        }
    }

    /// Entries for a single (non per-size) theme value
    fn entries(&self, attr: BoxAttr, value: &ThemeValue, path: &str) -> Entries {
        match value {
            ThemeValue::Number(n) => SmallVec::from_iter([(attr.uniform_property(), *n as f32)]),
            ThemeValue::Table(table) => {
                let mut entries = Entries::new();
                for (key, raw) in table {
                    let Some(property) = attr.property_for(key) else {
                        self.sink.warn(StyleWarning::UnknownKey {
                            kind: self.kind,
                            attr: attr.name(),
                            key: key.clone(),
                        });
                        continue;
                    };
                    let entry_path = format!("{path}.{key}");
                    match self.theme.resolve_value(raw, &entry_path) {
                        Ok(ThemeValue::Number(n)) => entries.push((property, *n as f32)),
                        Ok(other) => self.warn_theme(format!(
                            "{entry_path} is a {}, expected number",
                            other.kind()
                        )),
                        Err(err) => self.warn_theme(err.to_string()),
                    }
                }
                entries
            }
            other => {
                self.warn_theme(format!("{path} is a {}, expected number or table", other.kind()));
                SmallVec::from_iter([(attr.uniform_property(), 0.0)])
            }
        }
    }

    fn warn_theme(&self, reason: String) {
        self.sink.warn(StyleWarning::Theme {
            kind: self.kind,
            reason,
        });
    }
}

fn is_per_size(table: &ThemeTable) -> bool {
    SizeVariant::ALL.iter().any(|s| table.contains_key(s.key()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{Corners, CornerSpec, Sides, SpacingSpec};
    use crate::warnings::CollectingSink;
    use lumen_theme::ThemeBuilder;

    fn theme() -> Theme {
        ThemeBuilder::new("spacing")
            .set("spacing.wide", 16.0)
            .set("spacing.stacked.bottom", 8.0)
            .sized("corner.round", 12.0, 18.0, 24.0)
            .alias("kind.margin", "spacing.wide")
            .alias("kind.corner", "corner.round")
            .build()
    }

    fn resolver<'a>(theme: &'a Theme, sink: &'a CollectingSink) -> BoxResolver<'a> {
        BoxResolver {
            theme,
            sink,
            kind: "test",
            defaults: "kind",
        }
    }

    #[test]
    fn partial_record_nulls_every_other_side() {
        let theme = theme();
        let sink = CollectingSink::new();
        let spec = SpacingSpec::Record(Sides {
            top: Some(5.0),
            ..Default::default()
        });
        let records = resolver(&theme, &sink).resolve(BoxAttr::Margin, Some(&spec));

        for size in SizeVariant::ALL {
            let record = records.get(size);
            assert_eq!(record["marginTop"], StyleValue::Number(5.0));
            for property in [
                "margin",
                "marginBottom",
                "marginLeft",
                "marginRight",
                "marginHorizontal",
                "marginVertical",
            ] {
                assert_eq!(record[property], StyleValue::Null, "{size} {property}");
            }
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn uniform_number_sets_shorthand() {
        let theme = theme();
        let sink = CollectingSink::new();
        let records =
            resolver(&theme, &sink).resolve(BoxAttr::Padding, Some(&SpacingSpec::Uniform(3.0)));
        assert_eq!(records.small["padding"], StyleValue::Number(3.0));
        assert_eq!(records.small["paddingTop"], StyleValue::Null);
        assert_eq!(records.small, records.large);
    }

    #[test]
    fn themed_corner_expands_per_size() {
        let theme = theme();
        let sink = CollectingSink::new();
        let records = resolver(&theme, &sink).resolve::<Corners>(BoxAttr::Corner, None);
        assert_eq!(records.small["borderRadius"], StyleValue::Number(12.0));
        assert_eq!(records.normal["borderRadius"], StyleValue::Number(18.0));
        assert_eq!(records.large["borderRadius"], StyleValue::Number(24.0));
    }

    #[test]
    fn named_alias_reads_global_table() {
        let theme = theme();
        let sink = CollectingSink::new();
        let records = resolver(&theme, &sink)
            .resolve(BoxAttr::Margin, Some(&SpacingSpec::alias("stacked")));
        assert_eq!(records.normal["marginBottom"], StyleValue::Number(8.0));
        assert_eq!(records.normal["margin"], StyleValue::Null);
    }

    #[test]
    fn unknown_alias_falls_back_to_zero_and_warns() {
        let theme = theme();
        let sink = CollectingSink::new();
        let records = resolver(&theme, &sink)
            .resolve(BoxAttr::Corner, Some(&CornerSpec::alias("blobby")));
        assert_eq!(records.normal["borderRadius"], StyleValue::Number(0.0));
        assert_eq!(
            sink.take(),
            vec![StyleWarning::UnknownAlias {
                kind: "test",
                attr: "corner",
                name: "blobby".into()
            }]
        );
    }
}
