/* ************************************************************************ **
** This file is part of gfxmat, and is licensed under EITHER the MIT        **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;

use std::fmt;
use std::path::{Path, PathBuf};
use log::Level;

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
}

impl GlobalLogger {
    /// Also write the log to a file.
    ///
    /// NOTE: Relative paths will not be resolved until apply() is called.
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self
    {
        self.verbosity = match level > 0 {
            true => Verbosity::Loud,
            false => Verbosity::Default,
        };
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl Verbosity {
    fn own_crates(self) -> log::LevelFilter {
        match self {
            Verbosity::Default => log::LevelFilter::Debug,
            Verbosity::Loud => log::LevelFilter::Trace,
        }
    }
}

impl GlobalLogger {
    /// Install the logger. Only the first call in a process can succeed.
    pub fn apply(&mut self) -> FailResult<()>
    {
        use std::time::Instant;
        use log::LevelFilter;

        let start = Instant::now();
        let mut fern = fern::Dispatch::new();
        fern = fern.format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    ColorizedLevel(record.level()),
                    message))
            })
            .level(LevelFilter::Info)
            .level_for("gfxmat_tasks", self.verbosity.own_crates())
            .level_for("gfxmat_transform", self.verbosity.own_crates())
            .level_for("gfxmat_array_types", self.verbosity.own_crates())
            .chain(std::io::stderr());

        if let Some(path) = self.path.as_ref() {
            fern = fern.chain(fern::log_file(path)?);
        }

        fern.apply()?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", style.paint(self.0.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_clamped() {
        let mut logger = GlobalLogger::default();
        assert_eq!(logger.verbosity, Verbosity::Default);
        assert_eq!(logger.verbosity(3).verbosity, Verbosity::Loud);
        assert_eq!(logger.verbosity(-2).verbosity, Verbosity::Default);
        assert_eq!(logger.path("out.log").path, Some(PathBuf::from("out.log")));
    }

    #[test]
    fn colorized_level_keeps_the_name() {
        let s = ColorizedLevel(Level::Warn).to_string();
        assert!(s.contains("WARN"));
        assert_ne!(s, "WARN");
    }
}
