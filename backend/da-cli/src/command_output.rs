use serde::Serialize;
use serde_json::Value;

/// JSON printed on stdout plus whether the command achieved its goal.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub value: Value,
    pub success: bool,
}

impl CommandOutput {
    pub fn success<T: Serialize>(value: &T) -> crate::Result<Self> {
        Ok(Self {
            value: serde_json::to_value(value)?,
            success: true,
        })
    }

    pub fn with_status<T: Serialize>(value: &T, success: bool) -> crate::Result<Self> {
        Ok(Self {
            value: serde_json::to_value(value)?,
            success,
        })
    }

    pub fn render(&self, pretty: bool) -> crate::Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(&self.value)?
        } else {
            serde_json::to_string(&self.value)?
        };
        Ok(rendered)
    }
}
