//! Repository adapters for persistence layer

use rental_domain::clock::SharedClock;
use rental_infra::persistence::{
    FileBookingRepository, FileListingRepository, FileTodoRepository, FileUserRepository,
};
use rental_types::Result;

use crate::config::Config;

/// Open file-based listing repository
pub fn open_listing_repo(config: &Config) -> Result<FileListingRepository> {
    let data_dir = config.data_dir()?;
    FileListingRepository::open(&data_dir, config.seed_sample_data)
}

/// Open file-based todo repository
pub fn open_todo_repo(config: &Config, clock: SharedClock) -> Result<FileTodoRepository> {
    let data_dir = config.data_dir()?;
    FileTodoRepository::open(&data_dir, clock, config.seed_sample_data)
}

/// Open file-based user repository
pub fn open_user_repo(config: &Config, clock: SharedClock) -> Result<FileUserRepository> {
    let data_dir = config.data_dir()?;
    FileUserRepository::open(&data_dir, clock, config.seed_sample_data)
}

/// Open file-based booking repository
pub fn open_booking_repo(config: &Config, clock: SharedClock) -> Result<FileBookingRepository> {
    let data_dir = config.data_dir()?;
    FileBookingRepository::open(&data_dir, clock)
}

