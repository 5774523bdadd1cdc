use crate::error::DdlError;
use crate::sanitize::quote_literal;
use crate::types::DataType;
use std::fmt;

/// A column definition inside `CREATE TABLE`.
///
/// Renders as `name TYPE[ NOT NULL][ DEFAULT VALUE <v>]`. Defaults of text
/// types are sanitized and quoted; other defaults are inlined raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    name: String,
    data_type: DataType,
    nullable: bool,
    default_value: Option<String>,
}

impl TableColumn {
    pub fn new(
        name: impl Into<String>,
        data_type: DataType,
        nullable: bool,
    ) -> Result<Self, DdlError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DdlError::EmptyColumnName);
        }
        Ok(Self {
            name,
            data_type,
            nullable,
            default_value: None,
        })
    }

    /// Attach a default value.
    #[must_use]
    pub fn with_default(mut self, value: impl fmt::Display) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> &DataType {
        &self.data_type
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }
}

impl fmt::Display for TableColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.data_type.declaration())?;
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }
        if let Some(value) = &self.default_value {
            if self.data_type.is_text_type() {
                write!(f, " DEFAULT VALUE {}", quote_literal(value))?;
            } else {
                write!(f, " DEFAULT VALUE {value}")?;
            }
        }
        Ok(())
    }
}
