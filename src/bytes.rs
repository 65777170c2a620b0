/// Bounds-checked little-endian reads over a byte buffer.
///
/// Every read returns `None` when fewer than the required bytes remain, so an
/// out-of-range read can never be confused with a stored zero.
#[derive(Debug, Clone, Copy)]
pub struct ByteReader<'a> {
    data: &'a [u8],
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        ByteReader { data }
    }

    fn array<const N: usize>(&self, offset: u64) -> Option<[u8; N]> {
        let start = usize::try_from(offset).ok()?;
        let end = start.checked_add(N)?;
        self.data.get(start..end)?.try_into().ok()
    }

    pub fn u16_le(&self, offset: u64) -> Option<u16> {
        self.array(offset).map(u16::from_le_bytes)
    }

    pub fn u32_le(&self, offset: u64) -> Option<u32> {
        self.array(offset).map(u32::from_le_bytes)
    }

    pub fn tag(&self, offset: u64) -> Option<[u8; 4]> {
        self.array(offset)
    }

    /// Up to `len` bytes starting at `offset`, cut short at the end of the buffer.
    pub fn slice_clamped(&self, offset: u64, len: u64) -> &'a [u8] {
        let size = self.data.len() as u64;
        let start = offset.min(size);
        let end = offset.saturating_add(len).min(size);
        &self.data[start as usize..end as usize]
    }
}
