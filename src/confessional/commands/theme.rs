use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::preferences::Preferences;
use crate::store::{ConfessionStore, StorageBackend};

pub fn show<B: StorageBackend>(store: &ConfessionStore<B>) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.dark_mode = Some(Preferences::new(store.backend()).dark_mode()?);
    Ok(result)
}

pub fn toggle<B: StorageBackend>(store: &ConfessionStore<B>) -> Result<CmdResult> {
    let enabled = Preferences::new(store.backend()).toggle_dark_mode()?;

    let mut result = CmdResult::default();
    result.dark_mode = Some(enabled);
    result.add_message(CmdMessage::success(if enabled {
        "Dark mode on 🌙"
    } else {
        "Dark mode off ☀️"
    }));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn toggle_flips_persisted_flag() {
        let store = ConfessionStore::open(MemBackend::new()).unwrap();
        assert_eq!(show(&store).unwrap().dark_mode, Some(false));
        assert_eq!(toggle(&store).unwrap().dark_mode, Some(true));
        assert_eq!(show(&store).unwrap().dark_mode, Some(true));
    }
}
