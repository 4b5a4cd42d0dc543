use std::fmt::Display;

pub trait Strerr<T> {
    fn strerr(self) -> Result<T, String>;

    /// Same as `strerr`, with `what` prepended to the message.
    fn context(self, what: &str) -> Result<T, String>;
}

impl<T, U: Display> Strerr<T> for Result<T, U> {
    fn strerr(self) -> Result<T, String> {
        self.map_err(|e| e.to_string())
    }

    fn context(self, what: &str) -> Result<T, String> {
        self.map_err(|e| format!("{what}: {e}"))
    }
}
