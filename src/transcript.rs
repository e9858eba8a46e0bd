//! Verbose transcript of the hashing steps, written to stderr.

pub(crate) struct Transcript {
    enabled: bool,
    started: bool,
}

impl Transcript {
    pub(crate) fn new(enabled: bool) -> Self {
        Self {
            enabled,
            started: false,
        }
    }

    pub(crate) fn enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn note(&mut self, message: impl AsRef<str>) {
        if !self.enabled {
            return;
        }
        self.start();
        eprintln!("- {}", message.as_ref());
    }

    /// Print a titled multi-line section; long single lines wrap at 64 chars.
    pub(crate) fn block(&mut self, title: &str, content: &str) {
        if !self.enabled {
            return;
        }
        self.start();
        eprintln!("--- {title} ---");
        for line in content.as_bytes().chunks(64) {
            eprintln!("{}", String::from_utf8_lossy(line));
        }
        eprintln!("--- end {title} ---");
    }

    fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        eprintln!("transcript:");
    }
}
