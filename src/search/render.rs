use serde::Serialize;

use super::highlight::{Segment, highlight};
use super::query::Query;
use crate::catalog::{CatalogEntry, SuggestionKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionLine {
    pub label: String,
    pub kind: SuggestionKind,
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayModel {
    pub visible: bool,
    pub lines: Vec<SuggestionLine>,
}

impl DisplayModel {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, row: usize) -> Option<&SuggestionLine> {
        self.lines.get(row)
    }
}

pub fn render(list: &[&CatalogEntry], query: &Query) -> DisplayModel {
    let lines: Vec<SuggestionLine> = list
        .iter()
        .map(|entry| SuggestionLine {
            label: entry.label.clone(),
            kind: entry.kind,
            segments: highlight(&entry.label, query),
        })
        .collect();

    DisplayModel {
        visible: !lines.is_empty(),
        lines,
    }
}
