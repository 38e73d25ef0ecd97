//! Renderer projections: records and forms in, plain view data out.
//!
//! Nothing here touches the DOM, the network or validation. `view.rs` turns
//! these values into Yew markup, so every row action is derived from the
//! record id it belongs to on each render.

use common::model::fields::FormField;
use common::model::form::WineForm;
use common::model::wine::{is_good_label, WineId, WineRecord};

/// Columns of the catalog table, actions included.
pub const TABLE_COLUMNS: usize = 6;
pub const EMPTY_TABLE_MESSAGE: &str = "Nenhum vinho encontrado";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
}

impl Tone {
    pub fn badge_class(self) -> &'static str {
        match self {
            Tone::Positive => "bg-success",
            Tone::Negative => "bg-danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationTag {
    pub text: String,
    pub tone: Tone,
}

impl ClassificationTag {
    pub fn for_label(label: Option<&str>) -> Self {
        let tone = if is_good_label(label) {
            Tone::Positive
        } else {
            Tone::Negative
        };
        Self {
            text: label.unwrap_or("-").to_string(),
            tone,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(WineId),
    Delete(WineId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: WineId,
    /// Id, name, document and supplier, in column order.
    pub cells: [String; 4],
    pub tag: ClassificationTag,
    pub actions: [RowAction; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// Single placeholder row spanning every column.
    Empty { message: &'static str, colspan: usize },
    Rows(Vec<RowView>),
}

impl TableView {
    pub fn row_count(&self) -> usize {
        match self {
            TableView::Empty { .. } => 1,
            TableView::Rows(rows) => rows.len(),
        }
    }
}

pub fn table_view(records: &[WineRecord]) -> TableView {
    if records.is_empty() {
        return TableView::Empty {
            message: EMPTY_TABLE_MESSAGE,
            colspan: TABLE_COLUMNS,
        };
    }
    TableView::Rows(records.iter().map(row_view).collect())
}

fn row_view(record: &WineRecord) -> RowView {
    RowView {
        id: record.id,
        cells: [
            record.id.to_string(),
            record.sample.nome.clone(),
            record.sample.documento.clone(),
            record.sample.fornecedor.clone(),
        ],
        tag: ClassificationTag::for_label(record.classificacao.as_deref()),
        actions: [RowAction::Edit(record.id), RowAction::Delete(record.id)],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field: FormField,
    pub input_id: String,
    pub label: String,
    pub value: String,
    pub kind: InputKind,
    /// `Some("any")` on numeric inputs so any precision is accepted.
    pub step: Option<&'static str>,
    pub readonly: bool,
    /// Bootstrap column span: 6 for long labels, 4 otherwise.
    pub columns: u8,
}

/// Inputs of the create form; every field is editable.
pub fn create_form_view(form: &WineForm) -> Vec<FieldView> {
    FormField::all()
        .map(|field| field_view("wine", field, form, false))
        .collect()
}

/// Inputs of the edit surface. The document number is always read-only.
pub fn edit_form_view(form: &WineForm) -> Vec<FieldView> {
    FormField::all()
        .map(|field| {
            let mut view = field_view("edit", field, form, field == FormField::Documento);
            if view.readonly {
                view.label = format!("{} (não editável)", view.label);
            }
            view
        })
        .collect()
}

fn field_view(prefix: &str, field: FormField, form: &WineForm, readonly: bool) -> FieldView {
    let label = field.label();
    let kind = if field.is_numeric() {
        InputKind::Number
    } else {
        InputKind::Text
    };
    FieldView {
        field,
        input_id: format!("{}-{}", prefix, field.key().replace('_', "-")),
        label: label.to_string(),
        value: form.get(field).unwrap_or_default().to_string(),
        kind,
        step: (kind == InputKind::Number).then_some("any"),
        readonly,
        columns: if label.chars().count() > 12 { 6 } else { 4 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::fields::NumericField;

    fn record(id: u64, classificacao: Option<&str>) -> WineRecord {
        let mut value: serde_json::Value = serde_json::from_str(
            &crate::api::testing::record_json(id, &format!("vinho {}", id), "BOM"),
        )
        .unwrap();
        value["classificacao"] = classificacao.into();
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_list_renders_one_placeholder_row() {
        let view = table_view(&[]);
        assert_eq!(view.row_count(), 1);
        assert_eq!(
            view,
            TableView::Empty {
                message: "Nenhum vinho encontrado",
                colspan: TABLE_COLUMNS
            }
        );
    }

    #[test]
    fn one_row_per_record_with_actions_keyed_by_id() {
        let records = vec![record(3, Some("BOM")), record(8, Some("RUIM"))];
        let view = table_view(&records);
        assert_eq!(view.row_count(), 2);

        let TableView::Rows(rows) = view else {
            panic!("expected rows");
        };
        for (row, record) in rows.iter().zip(&records) {
            assert_eq!(row.id, record.id);
            assert_eq!(
                row.actions,
                [RowAction::Edit(record.id), RowAction::Delete(record.id)]
            );
            assert_eq!(row.cells[0], record.id.to_string());
            assert_eq!(row.cells[1], record.sample.nome);
        }
    }

    #[test]
    fn classification_tag_tone_follows_exact_label() {
        assert_eq!(ClassificationTag::for_label(Some("BOM")).tone, Tone::Positive);
        for other in [Some("RUIM"), Some("bom"), Some(""), None] {
            assert_eq!(ClassificationTag::for_label(other).tone, Tone::Negative);
        }
        assert_eq!(Tone::Positive.badge_class(), "bg-success");
        assert_eq!(Tone::Negative.badge_class(), "bg-danger");
    }

    #[test]
    fn edit_form_documento_is_read_only_regardless_of_content() {
        let mut form = WineForm::new();
        form.set(FormField::Documento, "");
        let fields = edit_form_view(&form);
        let documento = fields
            .iter()
            .find(|f| f.field == FormField::Documento)
            .unwrap();
        assert!(documento.readonly);
        assert_eq!(documento.label, "Documento (não editável)");
        assert_eq!(fields.iter().filter(|f| f.readonly).count(), 1);

        assert!(create_form_view(&form).iter().all(|f| !f.readonly));
    }

    #[test]
    fn numeric_inputs_accept_any_precision() {
        let fields = edit_form_view(&WineForm::new());
        assert_eq!(fields.len(), 14);
        for view in &fields {
            if view.field.is_numeric() {
                assert_eq!(view.kind, InputKind::Number);
                assert_eq!(view.step, Some("any"));
            } else {
                assert_eq!(view.kind, InputKind::Text);
                assert_eq!(view.step, None);
            }
        }
    }

    #[test]
    fn long_labels_take_wider_columns() {
        let fields = create_form_view(&WineForm::new());
        let columns = |field: FormField| fields.iter().find(|f| f.field == field).unwrap().columns;
        assert_eq!(columns(FormField::Nome), 4);
        assert_eq!(columns(FormField::Numeric(NumericField::TeorAlcoolico)), 6);
        assert_eq!(columns(FormField::Numeric(NumericField::AcucarResidual)), 6);
        assert_eq!(columns(FormField::Numeric(NumericField::Ph)), 4);
    }

    #[test]
    fn input_values_mirror_the_form() {
        let mut form = WineForm::new();
        form.set(FormField::Numeric(NumericField::Densidade), "0.9978");
        let fields = create_form_view(&form);
        let densidade = fields
            .iter()
            .find(|f| f.field == FormField::Numeric(NumericField::Densidade))
            .unwrap();
        assert_eq!(densidade.value, "0.9978");
        assert_eq!(densidade.input_id, "wine-densidade");
        assert_eq!(fields[0].value, "");
    }
}
