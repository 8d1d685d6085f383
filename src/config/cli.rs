use crate::utils::error::Result;
use std::io::BufRead;

/// Inputs from the command line, or one per stdin line when none were given.
pub fn collect_inputs<R: BufRead>(args: &[String], stdin: R) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args.to_vec());
    }

    let mut inputs = Vec::new();
    for line in stdin.lines() {
        let line = line?;
        let trimmed = line.trim();
        // 跳過空白行與註解
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        inputs.push(line);
    }
    Ok(inputs)
}
