//! Debug dumps of trained weights. Write-only: nothing in the crate reads
//! these files back.

use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::network::network::Network;

/// Writes every neuron's weights and last delta, rounded to 4 decimals, as a
/// Python-style literal:
///
/// ```text
/// net = [
/// 	# FC Layer 0
/// 	[
/// 		# neurone 0
/// 		{'weights': [0.4176, 0.7203], 'delta': -0.0021},
/// 	],
/// ]
/// ```
pub fn write_params_text<W: Write>(network: &Network, mut writer: W) -> Result<()> {
    write!(writer, "net = [")?;
    for (l, layer) in network.layers().iter().enumerate() {
        write!(writer, "\n\t# FC Layer {l}")?;
        write!(writer, "\n\t[")?;
        for (j, neuron) in layer.neurons.iter().enumerate() {
            let weights: Vec<String> = neuron.weights.iter().map(|&w| py_float(w)).collect();
            write!(writer, "\n\t\t# neurone {j}")?;
            write!(
                writer,
                "\n\t\t{{'weights': [{}], 'delta': {}}},",
                weights.join(", "),
                py_float(neuron.delta)
            )?;
        }
        write!(writer, "\n\t],")?;
    }
    write!(writer, "\n]")?;
    writer.flush()?;
    Ok(())
}

/// Pretty JSON of the network: dims plus per-layer `{weights, delta}`.
pub fn write_params_json<W: Write>(network: &Network, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, network)?;
    Ok(())
}

/// Writes the dump to `path`; a `.json` extension selects the JSON form,
/// anything else the text form.
pub fn save_params(network: &Network, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => write_params_json(network, writer),
        _ => write_params_text(network, writer),
    }
}

/// Rounds to 4 decimals; integral values keep a trailing `.0`.
fn py_float(value: f64) -> String {
    let rounded = (value * 1e4).round() / 1e4;
    if rounded.is_finite() && rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}
