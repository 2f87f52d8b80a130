//! Display-only panel
//!
//! Shows the panel title and the data it was opened with as label/value
//! rows. Confirming closes the slide-in through the injected reference.

use super::{Panel, PanelContext, PanelKind};
use crate::slide_in_ref::SlideInRef;

#[derive(Debug, Clone)]
pub struct SummaryPanel {
    kind: PanelKind,
    data: Option<serde_json::Value>,
    slide_in_ref: SlideInRef,
}

impl SummaryPanel {
    pub fn new(kind: PanelKind, ctx: PanelContext) -> Self {
        Self {
            kind,
            data: ctx.data,
            slide_in_ref: ctx.slide_in_ref,
        }
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        self.data.as_ref()
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl Panel for SummaryPanel {
    fn kind(&self) -> PanelKind {
        self.kind
    }

    fn title(&self) -> String {
        self.kind.display_name().to_string()
    }

    fn rows(&self) -> Vec<(String, String)> {
        match &self.data {
            None => vec![],
            Some(serde_json::Value::Object(map)) => map
                .iter()
                .map(|(key, value)| (key.clone(), display_value(value)))
                .collect(),
            Some(value) => vec![("value".to_string(), display_value(value))],
        }
    }

    fn confirm(&mut self) {
        tracing::debug!("{} confirmed, closing slide-in {}", self.kind, self.slide_in_ref.id());
        self.slide_in_ref.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{Msg, SlideInMsg};
    use serde_json::json;
    use std::sync::mpsc;

    #[test]
    fn test_rows_from_object_data() {
        let (tx, _rx) = mpsc::channel();
        let panel = SummaryPanel::new(
            PanelKind::SnapshotClone,
            PanelContext {
                data: Some(json!({ "snapshot": "tank/media@auto-1", "recursive": true })),
                slide_in_ref: SlideInRef::new(tx),
            },
        );

        let rows = panel.rows();
        assert!(rows.contains(&("snapshot".to_string(), "tank/media@auto-1".to_string())));
        assert!(rows.contains(&("recursive".to_string(), "true".to_string())));
    }

    #[test]
    fn test_rows_from_scalar_and_missing_data() {
        let (tx, _rx) = mpsc::channel();
        let slide_in_ref = SlideInRef::new(tx);
        let scalar = SummaryPanel::new(
            PanelKind::DatasetForm,
            PanelContext {
                data: Some(json!("tank/new")),
                slide_in_ref: slide_in_ref.clone(),
            },
        );
        assert_eq!(
            scalar.rows(),
            vec![("value".to_string(), "tank/new".to_string())]
        );

        let empty = SummaryPanel::new(
            PanelKind::DatasetForm,
            PanelContext {
                data: None,
                slide_in_ref,
            },
        );
        assert!(empty.rows().is_empty());
        assert_eq!(empty.title(), "Add Dataset");
    }

    #[test]
    fn test_confirm_closes_through_ref() {
        let (tx, rx) = mpsc::channel();
        let slide_in_ref = SlideInRef::new(tx);
        let mut panel = SummaryPanel::new(
            PanelKind::CloudsyncWizard,
            PanelContext {
                data: None,
                slide_in_ref: slide_in_ref.clone(),
            },
        );

        panel.confirm();
        panel.confirm();

        let msgs: Vec<Msg> = rx.try_iter().collect();
        assert_eq!(msgs.len(), 1);
        assert!(matches!(
            msgs[0],
            Msg::SlideIn(SlideInMsg::CloseRef(id)) if id == slide_in_ref.id()
        ));
    }
}
