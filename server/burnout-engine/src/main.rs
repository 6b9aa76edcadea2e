//! Binary entrypoint: read one JSON snapshot from stdin, write one JSON
//! object to stdout — the Analysis on success, an ErrorOutput on invalid
//! input. Exit code 1 only for stdin/stdout I/O failure.

use burnout_engine::types::ErrorOutput;
use burnout_engine::{analyze, Config, EngineError, InboundSnapshot};
use std::io::{self, Read, Write};

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "burnout-engine: io error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> io::Result<()> {
  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());

  let snapshot = match InboundSnapshot::from_json(&raw) {
    Ok(v) => v,
    Err(e) => {
      let err = ErrorOutput::new(e.to_string());
      serde_json::to_writer(&mut out, &err)?;
      writeln!(out)?;
      return out.flush();
    }
  };

  match analyze(&snapshot, &Config::default()) {
    Ok(analysis) => {
      serde_json::to_writer(&mut out, &analysis)?;
      writeln!(out)?;
    }
    Err(e) => {
      let err = match &e {
        EngineError::Validation { field, reason } => {
          ErrorOutput::new(reason.clone()).with_field(field.clone())
        }
        _ => ErrorOutput::new(e.to_string()),
      };
      serde_json::to_writer(&mut out, &err)?;
      writeln!(out)?;
    }
  }

  out.flush()
}
