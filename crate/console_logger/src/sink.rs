use std::{
    fmt,
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
};

/// The destination of the rendered lines
#[derive(Default)]
pub enum Sink {
    #[default]
    Stdout,
    Stderr,
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Wrap any writer
    pub fn writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::Writer(Box::new(writer))
    }

    /// Open `path` in append mode, creating the file if needed
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened
    pub fn file(path: &Path) -> io::Result<Self> {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::writer(file))
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Stderr => f.write_str("Stderr"),
            Self::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout => io::stdout().lock().write(buf),
            Self::Stderr => io::stderr().lock().write(buf),
            Self::Writer(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().write_all(buf),
            Self::Stderr => io::stderr().lock().write_all(buf),
            Self::Writer(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout => io::stdout().lock().flush(),
            Self::Stderr => io::stderr().lock().flush(),
            Self::Writer(w) => w.flush(),
        }
    }
}

/// An in-memory sink whose content can be read back.
///
/// Clones share the same buffer, so one clone can be handed to the logger
/// while another one is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink(Arc<Mutex<Vec<u8>>>);

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<u8>> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Everything written so far, lossily decoded as UTF-8
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer()).into_owned()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToOwned::to_owned).collect()
    }

    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl From<MemorySink> for Sink {
    fn from(sink: MemorySink) -> Self {
        Self::writer(sink)
    }
}
