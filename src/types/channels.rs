//! # Channel Masks
//!
//! 2.4 GHz 802.15.4 channels 11 through 26 as a 32-bit mask where bit `n` selects
//! channel `n`. Channel numbers outside that range are rejected, never masked off.

use crate::core::enums::FlagSet;
use crate::error::{constants, CodecError, Result};
use crate::types::named::CHANNELS;

/// Lowest valid channel
pub const MIN_CHANNEL: u8 = 11;
/// Highest valid channel
pub const MAX_CHANNEL: u8 = 26;
/// Every valid channel selected
pub const ALL_CHANNELS: u32 = 0x07FF_F800;

fn check_channel(channel: i64) -> Result<u8> {
    if !(i64::from(MIN_CHANNEL)..=i64::from(MAX_CHANNEL)).contains(&channel) {
        return Err(CodecError::range("channel", channel, MIN_CHANNEL, MAX_CHANNEL));
    }
    Ok(channel as u8)
}

/// Compute the channel bitmask for `channels`.
///
/// # Errors
/// `Range` for any channel outside 11..=26.
pub fn channel_mask<I>(channels: I) -> Result<u32>
where
    I: IntoIterator<Item = u8>,
{
    let mut mask = 0u32;
    for channel in channels {
        let channel = check_channel(i64::from(channel))?;
        mask |= 1 << channel;
    }
    Ok(mask)
}

/// Channel mask as a `Channels` flag set, ready for a record field
pub fn channel_flags<I>(channels: I) -> Result<FlagSet>
where
    I: IntoIterator<Item = u8>,
{
    FlagSet::new(&CHANNELS, channel_mask(channels)?)
}

/// Channels selected by `mask`, ascending. Bits outside 11..=26 are ignored.
pub fn channels_in_mask(mask: u32) -> Vec<u8> {
    (MIN_CHANNEL..=MAX_CHANNEL)
        .filter(|channel| mask & (1 << channel) != 0)
        .collect()
}

/// Parse a comma separated channel list such as `"11,15,20"`
pub fn parse_channel_list(input: &str) -> Result<Vec<u8>> {
    if input.trim().is_empty() {
        return Err(CodecError::Format(
            constants::ERR_CHANNEL_LIST_EMPTY.to_string(),
        ));
    }

    input
        .split(',')
        .map(|part| {
            let channel = part.trim().parse::<i64>().map_err(|_| {
                CodecError::Format(format!(
                    "{}: {part:?}",
                    constants::ERR_CHANNEL_NOT_INTEGER
                ))
            })?;
            check_channel(channel)
        })
        .collect()
}
