use anyhow::{bail, Context, Result};
use clap::Args;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

use crate::indices::parse_indices;
use crate::slicer::Slicer;
use crate::source::{self, STDIN};

#[derive(Args, Clone, Debug)]
pub struct SliceArgs {
    /// Indices to slice by: START or START:END. Negative values count back from the end
    #[arg(
        short,
        long,
        visible_alias = "indicies",
        env = "SLICER_INDICES",
        value_name = "START[:END]",
        allow_hyphen_values = true
    )]
    pub indices: String,

    /// Fail on indices outside the input instead of clamping them
    #[arg(short, long, env = "SLICER_STRICT")]
    pub strict: bool,

    /// Slice each line of the input separately
    #[arg(short, long, env = "SLICER_LINES")]
    pub lines: bool,

    /// Input file, or "-" for standard input (default)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,
}

/// Counts for one run, logged at debug level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines in lines mode, otherwise 1.
    pub units: usize,
    pub bytes_in: usize,
    pub bytes_out: usize,
}

pub fn run(args: &SliceArgs, out: &mut impl Write) -> Result<RunSummary> {
    if args.inputs.len() > 1 {
        bail!("only one input file allowed");
    }

    let indices = parse_indices(&args.indices).context("error parsing indices")?;
    let slicer = Slicer::new(args.strict, &indices).context("error creating slicer")?;

    let path = args.inputs.first().map(String::as_str).unwrap_or(STDIN);
    let reader = source::open(path).context("error initializing reader")?;
    debug!(%slicer, strict = args.strict, lines = args.lines, path, "slicing input");

    let summary = if args.lines {
        slice_lines(&slicer, reader, out)?
    } else {
        slice_whole(&slicer, reader, out)?
    };
    debug!(
        units = summary.units,
        bytes_in = summary.bytes_in,
        bytes_out = summary.bytes_out,
        "done"
    );
    Ok(summary)
}

/// Slices every line of `reader` and writes each result on its own line.
/// Line endings (`\n` or `\r\n`) are not part of the sliced content.
pub fn slice_lines(
    slicer: &Slicer,
    mut reader: impl BufRead,
    out: &mut impl Write,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = reader
            .read_until(b'\n', &mut line)
            .context("error scanning input")?;
        if read == 0 {
            break;
        }
        summary.units += 1;
        summary.bytes_in += read;

        let content = trim_line_ending(&line);
        let sliced = slicer.slice_bytes(content).with_context(|| {
            format!(
                "error slicing line {} {:?}",
                summary.units,
                String::from_utf8_lossy(content)
            )
        })?;
        trace!(line = summary.units, len = sliced.len(), "sliced line");
        write_unit(out, sliced)?;
        summary.bytes_out += sliced.len();
    }
    out.flush().context("error flushing output")?;
    Ok(summary)
}

/// Slices all of `reader` at once and writes the result followed by a newline.
pub fn slice_whole(
    slicer: &Slicer,
    mut reader: impl BufRead,
    out: &mut impl Write,
) -> Result<RunSummary> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).context("error reading input")?;
    let sliced = slicer
        .slice_bytes(&input)
        .with_context(|| format!("error slicing bytes {:?}", String::from_utf8_lossy(&input)))?;
    write_unit(out, sliced)?;
    out.flush().context("error flushing output")?;
    Ok(RunSummary {
        units: 1,
        bytes_in: input.len(),
        bytes_out: sliced.len(),
    })
}

fn write_unit(out: &mut impl Write, sliced: &[u8]) -> Result<()> {
    out.write_all(sliced)
        .and_then(|()| out.write_all(b"\n"))
        .with_context(|| {
            format!(
                "error writing output to stdout {:?}",
                String::from_utf8_lossy(sliced)
            )
        })
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, SliceError};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn args(indices: &str, strict: bool, lines: bool, inputs: &[&str]) -> SliceArgs {
        SliceArgs {
            indices: indices.to_string(),
            strict,
            lines,
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn lines(indices: &[isize], strict: bool, input: &str) -> Result<String> {
        let slicer = Slicer::new(strict, indices)?;
        let mut out = Vec::new();
        slice_lines(&slicer, Cursor::new(input), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn slices_each_line() {
        assert_eq!(lines(&[1, -1], false, "abc\ndefg\n").unwrap(), "b\nef\n");
        assert_eq!(lines(&[0, 2], false, "abc\r\nd\r\n").unwrap(), "ab\nd\n");
        assert_eq!(lines(&[-2], false, "abc\nxy").unwrap(), "bc\nxy\n");
        assert_eq!(lines(&[5], false, "abc\n\nabcdefg\n").unwrap(), "\n\nfg\n");
        assert_eq!(lines(&[], false, "").unwrap(), "");
    }

    #[test]
    fn line_errors_name_the_line() {
        let err = lines(&[0, 3], true, "abc\nde\n").unwrap_err();
        assert_eq!(err.to_string(), "error slicing line 2 \"de\"");
        let cause = err.downcast_ref::<SliceError>().unwrap();
        assert_eq!(cause.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn slices_whole_input_once() {
        let slicer = Slicer::new(false, &[0, 5]).unwrap();
        let mut out = Vec::new();
        let summary = slice_whole(&slicer, Cursor::new("Hello World\nsecond"), &mut out).unwrap();
        assert_eq!(out, b"Hello\n");
        assert_eq!(
            summary,
            RunSummary {
                units: 1,
                bytes_in: 18,
                bytes_out: 5,
            }
        );
    }

    #[test]
    fn whole_input_keeps_non_utf8_bytes() {
        let slicer = Slicer::new(true, &[1]).unwrap();
        let mut out = Vec::new();
        slice_whole(&slicer, Cursor::new(vec![0xff, 0xfe, b'a']), &mut out).unwrap();
        assert_eq!(out, vec![0xfe, b'a', b'\n']);
    }

    struct FlushFails(Vec<u8>);

    impl Write for FlushFails {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn flush_errors_are_reported() {
        let slicer = Slicer::new(false, &[]).unwrap();
        let mut out = FlushFails(Vec::new());
        let err = slice_whole(&slicer, Cursor::new("abc"), &mut out).unwrap_err();
        assert_eq!(format!("{:#}", err), "error flushing output: closed");

        let err = slice_lines(&slicer, Cursor::new("abc\n"), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "error flushing output");
    }

    #[test]
    fn runs_against_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"one\ntwo\nthree\n").unwrap();
        let path = file.path().to_str().unwrap();

        let mut out = Vec::new();
        let summary = run(&args("-3", false, true, &[path]), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "one\ntwo\nree\n");
        assert_eq!(summary.units, 3);
        assert_eq!(summary.bytes_in, 14);
        assert_eq!(summary.bytes_out, 9);
    }

    #[test]
    fn rejects_bad_arguments_before_reading() {
        let mut out = Vec::new();
        let err = run(&args("0:5", false, false, &["a", "b"]), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "only one input file allowed");

        let err = run(&args("0:x", false, false, &[]), &mut out).unwrap_err();
        assert_eq!(format!("{:#}", err), "error parsing indices: error parsing string \"x\"");

        let err = run(&args("1:2:3", false, false, &[]), &mut out).unwrap_err();
        assert_eq!(format!("{:#}", err), "error creating slicer: invalid number of indices 3");
        assert!(out.is_empty());
    }

    #[test]
    fn reports_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.txt");
        let mut out = Vec::new();
        let err = run(&args("0", false, false, &[path.to_str().unwrap()]), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "error initializing reader");
    }

    #[test]
    fn trims_line_endings() {
        assert_eq!(trim_line_ending(b"ab\r\n"), b"ab");
        assert_eq!(trim_line_ending(b"ab\n"), b"ab");
        assert_eq!(trim_line_ending(b"ab"), b"ab");
        assert_eq!(trim_line_ending(b"a\rb"), b"a\rb");
    }
}
