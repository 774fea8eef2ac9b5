//! Block serialization through the fixed key order.

use crate::keys::KEY_ORDER;
use crate::preset::PresetBlock;
use biome_fs::LegacyWriter;
use biome_fs::encoding::DOS_LINE_ENDING;
use std::io::{self, Write};

/// Lines of a serialized block: the header, then `key=value` for each
/// [`KEY_ORDER`] key present in the block. Other keys are dropped.
pub fn block_lines(block: &PresetBlock) -> impl Iterator<Item = String> + '_ {
    std::iter::once(block.header.clone()).chain(
        KEY_ORDER
            .iter()
            .filter_map(|key| block.get(key).map(|value| format!("{key}={value}"))),
    )
}

/// Write a block, one `\r\n`-terminated line each.
pub fn write_block<W: Write>(block: &PresetBlock, out: &mut LegacyWriter<W>) -> io::Result<()> {
    for line in block_lines(block) {
        out.write_line(&line)?;
    }
    Ok(())
}

/// Render a block as text with `\r\n` line endings.
///
/// # Example
/// ```
/// use biome_blocks::{PresetBlock, format_block};
///
/// let block = PresetBlock::new("[A]")
///     .with_value("HeightHighLimit", "9")
///     .with_value("VerticalMask", "1");
/// assert_eq!(format_block(&block), "[A]\r\nVerticalMask=1\r\nHeightHighLimit=9\r\n");
/// ```
pub fn format_block(block: &PresetBlock) -> String {
    block_lines(block)
        .map(|line| line + DOS_LINE_ENDING)
        .collect()
}
