use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MachineEnvelope<T>
where
    T: Serialize,
{
    pub command: String,
    pub ok: bool,
    pub data: T,
    pub warnings: Vec<String>,
}

/// Print a machine-readable JSON envelope for a command result.
pub fn emit_json<T>(command: &str, data: T, warnings: Vec<String>) -> Result<()>
where
    T: Serialize,
{
    let envelope = MachineEnvelope {
        command: command.to_string(),
        ok: true,
        data,
        warnings,
    };

    let out = serde_json::to_string_pretty(&envelope)?;
    println!("{}", out);

    Ok(())
}
