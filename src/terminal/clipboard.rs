//! Clipboard writes shared by the CLI and the form.

use copypasta::ClipboardProvider;
use zeroize::Zeroize;

/// Put `text` on the clipboard, then scrub the copy read back from the backend.
pub fn copy_to<C: ClipboardProvider + ?Sized>(ctx: &mut C, text: &str) -> Result<(), String> {
    ctx.set_contents(text.to_owned()).map_err(|e| e.to_string())?;
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fake {
    use std::error::Error;

    use copypasta::ClipboardProvider;

    /// In-memory clipboard that can be told to reject writes.
    #[derive(Default)]
    pub struct FakeClipboard {
        pub contents: Option<String>,
        pub reads: usize,
        pub fail: bool,
    }

    impl ClipboardProvider for FakeClipboard {
        fn get_contents(&mut self) -> Result<String, Box<dyn Error + Send + Sync + 'static>> {
            self.reads += 1;
            self.contents.clone().ok_or_else(|| "empty clipboard".into())
        }

        fn set_contents(&mut self, data: String) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
            if self.fail {
                return Err("no display".into());
            }
            self.contents = Some(data);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeClipboard;
    use super::*;

    #[test]
    fn successful_copy_reads_back_once() {
        let mut clipboard = FakeClipboard::default();
        assert_eq!(copy_to(&mut clipboard, "hunter2"), Ok(()));
        assert_eq!(clipboard.contents.as_deref(), Some("hunter2"));
        assert_eq!(clipboard.reads, 1);
    }

    #[test]
    fn rejected_write_is_reported_without_readback() {
        let mut clipboard = FakeClipboard {
            fail: true,
            ..Default::default()
        };
        assert_eq!(copy_to(&mut clipboard, "hunter2"), Err("no display".to_string()));
        assert_eq!(clipboard.contents, None);
        assert_eq!(clipboard.reads, 0);
    }

    #[test]
    fn works_through_a_trait_object() {
        let mut clipboard: Box<dyn ClipboardProvider> = Box::new(FakeClipboard::default());
        assert!(copy_to(clipboard.as_mut(), "abc").is_ok());
        assert_eq!(clipboard.get_contents().ok().as_deref(), Some("abc"));
    }
}
