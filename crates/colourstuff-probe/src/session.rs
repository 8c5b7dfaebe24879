//! Interactive `spotread` session.
//!
//! spotread prompts for a keypress before every reading, prints
//! `Result is XYZ: X Y Z, ...` once the instrument answers, and exits after
//! `q` is pressed twice. The session drives that dialogue over the child's
//! stdin and stdout. Output is pumped by a background thread so every wait
//! can be bounded by a timeout.

use std::io::{Read, Write};
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use colourstuff_core::{ReadingSource, Tristimulus};

use crate::config::SpotreadConfig;
use crate::error::{ProbeError, Result};

/// Printed by spotread when it is ready to take a reading.
pub const READY_PROMPT: &str = "any other key to take a reading:";
/// Precedes the measured values.
pub const RESULT_MARKER: &str = "Result is XYZ:";

const READ_CHUNK: usize = 1024;
const EXIT_POLL: Duration = Duration::from_millis(50);

/// Parse the XYZ triple from a spotread result line.
///
/// Accepts `Result is XYZ: 95.047000 100.000000 108.883000, D50 Lab: ...`;
/// the values end at the first comma after the marker.
pub fn parse_reading(text: &str) -> Result<Tristimulus> {
    let malformed = || ProbeError::MalformedReading(text.trim().to_string());

    let start = text.find(RESULT_MARKER).ok_or_else(malformed)?;
    let rest = &text[start + RESULT_MARKER.len()..];
    let (values, _) = rest.split_once(',').ok_or_else(malformed)?;

    let values = values
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;
    match values[..] {
        [x, y, z] => Ok(Tristimulus::new(x, y, z)),
        _ => Err(malformed()),
    }
}

/// A running `spotread` dialogue.
pub struct Spotread {
    child: Option<Child>,
    input: Box<dyn Write + Send>,
    output: Receiver<Vec<u8>>,
    pending: String,
    timeout: Duration,
}

impl Spotread {
    /// Start `spotread` with the configured display type and port.
    pub fn spawn(config: &SpotreadConfig) -> Result<Self> {
        let args = config.session_args();
        tracing::info!("starting {} {}", config.command, args.join(" "));

        let mut child = Command::new(&config.command)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ProbeError::Spawn {
                command: config.command.clone(),
                source,
            })?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            return Err(ProbeError::InvalidArgument("child process has no stdio pipes"));
        };
        let mut session = Self::from_streams(stdout, stdin, config.timeout());
        session.child = Some(child);
        Ok(session)
    }

    /// Drive a session over arbitrary streams, e.g. a recorded transcript.
    pub fn from_streams<R, W>(output: R, input: W, timeout: Duration) -> Self
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            child: None,
            input: Box::new(input),
            output: pump(output),
            pending: String::new(),
            timeout,
        }
    }

    /// Take one reading.
    pub fn sample(&mut self) -> Result<Tristimulus> {
        self.expect(READY_PROMPT)?;
        self.send(b" ")?;
        let text = self.read_until(RESULT_MARKER, |buf| {
            let start = buf.find(RESULT_MARKER)?;
            let comma = buf[start..].find(',')?;
            Some(start + comma + 1)
        })?;
        let reading = parse_reading(&text)?;
        tracing::debug!("probe reading {reading}");
        Ok(reading)
    }

    /// Leave spotread at its prompt and wait for it to exit.
    pub fn quit(mut self) -> Result<()> {
        self.expect(READY_PROMPT)?;
        self.send(b"q")?;
        // Second keypress confirms.
        self.send(b"q")?;

        let Some(mut child) = self.child.take() else {
            return Ok(());
        };
        let deadline = Instant::now() + self.timeout;
        while Instant::now() < deadline {
            if let Some(status) = child.try_wait()? {
                tracing::info!("spotread exited with {status}");
                return Ok(());
            }
            thread::sleep(EXIT_POLL);
        }
        tracing::warn!("spotread did not exit after quit; killing it");
        child.kill()?;
        child.wait()?;
        Ok(())
    }

    fn send(&mut self, keys: &[u8]) -> Result<()> {
        self.input.write_all(keys)?;
        self.input.flush()?;
        Ok(())
    }

    fn expect(&mut self, needle: &'static str) -> Result<String> {
        self.read_until(needle, |buf| buf.find(needle).map(|i| i + needle.len()))
    }

    /// Accumulate output until `matcher` reports the end of a match, then
    /// consume and return everything up to that point.
    fn read_until(
        &mut self,
        expected: &'static str,
        matcher: impl Fn(&str) -> Option<usize>,
    ) -> Result<String> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(end) = matcher(&self.pending) {
                return Ok(self.pending.drain(..end).collect());
            }
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.output.recv_timeout(remaining) {
                Ok(chunk) => self.pending.push_str(&String::from_utf8_lossy(&chunk)),
                Err(RecvTimeoutError::Timeout) => {
                    return Err(ProbeError::Timeout {
                        expected,
                        timeout: self.timeout,
                    });
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(ProbeError::Disconnected { expected });
                }
            }
        }
    }
}

impl ReadingSource for Spotread {
    type Error = ProbeError;

    fn acquire(&mut self) -> Result<Tristimulus> {
        self.sample()
    }
}

impl Drop for Spotread {
    fn drop(&mut self) {
        if let Some(child) = &mut self.child {
            if let Ok(None) = child.try_wait() {
                tracing::debug!("killing spotread on drop");
                let _ = child.kill();
            }
            let _ = child.wait();
        }
    }
}

/// Forward everything `reader` produces to a channel until EOF.
fn pump<R: Read + Send + 'static>(mut reader: R) -> Receiver<Vec<u8>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = [0u8; READ_CHUNK];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => {
                    if tx.send(buf[..n].to_vec()).is_err() {
                        break;
                    }
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracing::warn!("probe output closed: {e}");
                    break;
                }
            }
        }
    });
    rx
}
