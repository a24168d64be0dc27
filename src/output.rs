//! Waveform output formatting (CSV and JSON).
//!
//! Both formats carry the two plot panels: voltages first, then currents.

use std::io::Write;

use serde::Serialize;

use crate::error::Result;
use crate::response::{Waveform, WaveformSet};

/// Write a waveform set as CSV.
///
/// Format:
/// ```csv
/// time,Voltage across R,Voltage across C,Current
/// 0,5,0,0.05
/// 0.0001001001001001001,4.950...,0.049...,0.0495...
/// ```
pub fn write_csv<W: Write>(set: &WaveformSet, writer: &mut W) -> Result<()> {
    let columns: Vec<&Waveform> = set.voltages().chain(set.currents()).collect();

    // Header row
    write!(writer, "time")?;
    for w in &columns {
        write!(writer, ",{}", w.label)?;
    }
    writeln!(writer)?;

    // Data rows
    for (k, t) in set.time().iter().enumerate() {
        write!(writer, "{}", t)?;
        for w in &columns {
            write!(writer, ",{}", w.values[k])?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

#[derive(Serialize)]
struct Panels<'a> {
    time: &'a [f64],
    voltages: Vec<&'a Waveform>,
    currents: Vec<&'a Waveform>,
}

/// Write a waveform set as JSON.
///
/// Format:
/// ```json
/// {"time":[...],"voltages":[{"label":"Voltage across R","values":[...]}],"currents":[...]}
/// ```
pub fn write_json<W: Write>(set: &WaveformSet, writer: &mut W) -> Result<()> {
    let panels = Panels {
        time: set.time(),
        voltages: set.voltages().collect(),
        currents: set.currents().collect(),
    };
    serde_json::to_writer(&mut *writer, &panels)?;
    writeln!(writer)?;
    Ok(())
}

/// Render a waveform set as a JSON string.
pub fn to_json_string(set: &WaveformSet) -> Result<String> {
    let mut buffer = Vec::new();
    write_json(set, &mut buffer)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).trim_end().to_string())
}
