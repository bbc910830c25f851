//! File dialog sessions
//!
//! One dialog at a time. While a dialog is open the chooser widget is polled every
//! frame; when the user picks a path it is returned for delivery to the host and the
//! dialog remembers the directory the user ended up in.

use crate::error::{BridgeError, BridgeResult};
use crate::ui::context::FileChooser;
use std::path::{Path, PathBuf};

/// What the dialog is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogMode {
    /// Pick an existing file to load
    Open,
    /// Pick a destination to save to
    Save,
}

/// How a chooser interaction ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The user confirmed a path
    Selected(PathBuf),
    /// The user closed the dialog without choosing
    Cancelled,
}

/// File dialog session state
#[derive(Debug, Clone, Default)]
pub struct FileDialog {
    current_directory: Option<PathBuf>,
    active: Option<DialogMode>,
}

impl FileDialog {
    /// Create a closed dialog starting in `start_directory`
    pub fn new(start_directory: Option<PathBuf>) -> Self {
        Self {
            current_directory: start_directory,
            active: None,
        }
    }

    /// Open a dialog
    pub fn open(&mut self, mode: DialogMode) -> BridgeResult<()> {
        if self.active.is_some() {
            return Err(BridgeError::DialogAlreadyOpen);
        }
        if self.current_directory.is_none() {
            return Err(BridgeError::MissingStartDirectory);
        }
        log::debug!("Opening {:?} dialog", mode);
        self.active = Some(mode);
        Ok(())
    }

    /// Whether a dialog is running
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Mode of the running dialog
    pub fn mode(&self) -> Option<DialogMode> {
        self.active
    }

    /// Directory the next dialog opens in
    pub fn current_directory(&self) -> Option<&Path> {
        self.current_directory.as_deref()
    }

    /// Override the directory the next dialog opens in
    pub fn set_current_directory(&mut self, dir: impl Into<PathBuf>) {
        self.current_directory = Some(dir.into());
    }

    /// Advance the running dialog by one frame
    ///
    /// Returns the chosen path when the user confirmed one this frame. A cancelled
    /// dialog closes and returns `None`.
    pub fn poll<C: FileChooser + ?Sized>(&mut self, chooser: &mut C) -> Option<PathBuf> {
        let mode = self.active?;
        let dir = self.current_directory.as_deref()?;

        match chooser.poll(mode, dir)? {
            DialogOutcome::Selected(path) if path.as_os_str().is_empty() => {
                log::trace!("Chooser reported an empty path, dialog stays open");
                None
            }
            DialogOutcome::Selected(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    self.current_directory = Some(parent.to_path_buf());
                }
                self.active = None;
                log::debug!("{:?} dialog selected {}", mode, path.display());
                Some(path)
            }
            DialogOutcome::Cancelled => {
                self.active = None;
                log::debug!("{:?} dialog cancelled", mode);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::tests::support::ScriptedChooser;

    #[test]
    fn test_open_requires_start_directory() {
        let mut dialog = FileDialog::new(None);
        assert!(matches!(dialog.open(DialogMode::Open), Err(BridgeError::MissingStartDirectory)));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_one_dialog_at_a_time() {
        let mut dialog = FileDialog::new(Some(PathBuf::from("/saves")));
        dialog.open(DialogMode::Save).unwrap();
        assert!(matches!(dialog.open(DialogMode::Open), Err(BridgeError::DialogAlreadyOpen)));
        assert_eq!(dialog.mode(), Some(DialogMode::Save));
    }

    #[test]
    fn test_closed_dialog_does_not_poll() {
        let mut dialog = FileDialog::new(Some(PathBuf::from("/saves")));
        let mut chooser = ScriptedChooser::new(vec![Some(DialogOutcome::Cancelled)]);
        assert_eq!(dialog.poll(&mut chooser), None);
        assert_eq!(chooser.polls.len(), 0);
    }

    #[test]
    fn test_selection_closes_and_moves_directory() {
        let mut dialog = FileDialog::new(Some(PathBuf::from("/saves")));
        let mut chooser = ScriptedChooser::new(vec![
            None,
            Some(DialogOutcome::Selected(PathBuf::from("/saves/slot2/game.sav"))),
        ]);
        dialog.open(DialogMode::Open).unwrap();

        assert_eq!(dialog.poll(&mut chooser), None);
        assert!(dialog.is_open());

        assert_eq!(dialog.poll(&mut chooser), Some(PathBuf::from("/saves/slot2/game.sav")));
        assert!(!dialog.is_open());
        assert_eq!(dialog.current_directory(), Some(Path::new("/saves/slot2")));
        assert_eq!(
            chooser.polls,
            vec![
                (DialogMode::Open, PathBuf::from("/saves")),
                (DialogMode::Open, PathBuf::from("/saves")),
            ]
        );
    }

    #[test]
    fn test_cancel_closes_without_path() {
        let mut dialog = FileDialog::new(Some(PathBuf::from("/saves")));
        let mut chooser = ScriptedChooser::new(vec![Some(DialogOutcome::Cancelled)]);
        dialog.open(DialogMode::Save).unwrap();

        assert_eq!(dialog.poll(&mut chooser), None);
        assert!(!dialog.is_open());
        assert_eq!(dialog.current_directory(), Some(Path::new("/saves")));
        dialog.open(DialogMode::Open).unwrap();
    }

    #[test]
    fn test_empty_selection_keeps_dialog_open() {
        let mut dialog = FileDialog::new(Some(PathBuf::from("/saves")));
        let mut chooser = ScriptedChooser::new(vec![Some(DialogOutcome::Selected(PathBuf::new()))]);
        dialog.open(DialogMode::Open).unwrap();
        assert_eq!(dialog.poll(&mut chooser), None);
        assert!(dialog.is_open());
    }

    #[test]
    fn test_bare_file_name_keeps_directory() {
        let mut dialog = FileDialog::new(Some(PathBuf::from("/saves")));
        let mut chooser = ScriptedChooser::new(vec![Some(DialogOutcome::Selected(PathBuf::from("quick.sav")))]);
        dialog.open(DialogMode::Save).unwrap();
        assert_eq!(dialog.poll(&mut chooser), Some(PathBuf::from("quick.sav")));
        assert_eq!(dialog.current_directory(), Some(Path::new("/saves")));
    }
}
