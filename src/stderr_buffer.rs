use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

static BUFFER: Mutex<Option<Vec<String>>> = Mutex::new(None);

fn buffer() -> MutexGuard<'static, Option<Vec<String>>> {
    BUFFER.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Activate buffering. While active, `warn()` calls and log output are
/// stored instead of printed to stderr.
pub fn activate() {
    *buffer() = Some(Vec::new());
}

/// Deactivate buffering and return all collected messages.
pub fn drain() -> Vec<String> {
    buffer().take().unwrap_or_default()
}

/// Write a warning message. If buffering is active the message is stored;
/// otherwise it is printed to stderr immediately.
pub fn warn(msg: String) {
    let mut guard = buffer();
    if let Some(buf) = guard.as_mut() {
        buf.push(msg);
    } else {
        drop(guard);
        eprintln!("{}", msg);
    }
}

/// `io::Write` sink for the log subscriber that routes through the buffer
#[derive(Debug, Default, Clone, Copy)]
pub struct BufferedStderr;

impl io::Write for BufferedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        let text = text.trim_end_matches('\n');
        if !text.is_empty() {
            warn(text.to_string());
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Single test: the buffer is process-global
    #[test]
    fn test_buffering_lifecycle() {
        activate();
        warn("first".to_string());
        BufferedStderr.write_all(b"second\n").unwrap();
        BufferedStderr.write_all(b"\n").unwrap();

        // Other tests may log concurrently; only check our own lines
        let drained = drain();
        let ours: Vec<&String> = drained
            .iter()
            .filter(|m| *m == "first" || *m == "second")
            .collect();
        assert_eq!(ours, vec!["first", "second"]);
        assert!(drained.iter().all(|m| !m.is_empty()));
        assert!(drain().is_empty());
    }
}
