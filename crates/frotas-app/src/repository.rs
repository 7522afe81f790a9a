//! Store openers for the persistence layer

use frotas_store::YardStore;
use frotas_types::Result;

use crate::config::Config;

/// Open the yard store at the configured directory
pub fn open_yard_store(config: &Config) -> Result<YardStore> {
    let store_dir = config.store_dir()?;
    YardStore::open(store_dir)
}
