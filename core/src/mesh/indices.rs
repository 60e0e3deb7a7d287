//! Index buffer storage.

/// Index format for indexed drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integers (max 65535 vertices).
    #[default]
    Uint16,
    /// 32-bit unsigned integers (max ~4 billion vertices).
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }

    /// Narrowest format able to hold every value up to `max_index`.
    pub fn for_max_index(max_index: u32) -> Self {
        if max_index > u32::from(u16::MAX) {
            Self::Uint32
        } else {
            Self::Uint16
        }
    }
}

/// Triangle-list index buffer in its GPU element width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indices {
    /// 16-bit indices.
    U16(Vec<u16>),
    /// 32-bit indices.
    U32(Vec<u32>),
}

impl Indices {
    /// Store `values` in the narrowest width that holds all of them.
    ///
    /// Scans once for the maximum: any value above 65535 selects
    /// [`IndexFormat::Uint32`], otherwise [`IndexFormat::Uint16`].
    pub fn from_values(values: &[u32]) -> Self {
        let max = values.iter().copied().max().unwrap_or(0);
        match IndexFormat::for_max_index(max) {
            IndexFormat::Uint16 => Self::U16(values.iter().map(|&i| i as u16).collect()),
            IndexFormat::Uint32 => Self::U32(values.to_vec()),
        }
    }

    /// Element width of this buffer.
    pub fn format(&self) -> IndexFormat {
        match self {
            Self::U16(_) => IndexFormat::Uint16,
            Self::U32(_) => IndexFormat::Uint32,
        }
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        match self {
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
        }
    }

    /// Whether the buffer holds no indices.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Index at position `i`, widened to `u32`.
    pub fn get(&self, i: usize) -> Option<u32> {
        match self {
            Self::U16(v) => v.get(i).map(|&x| u32::from(x)),
            Self::U32(v) => v.get(i).copied(),
        }
    }

    /// Iterate over all indices, widened to `u32`.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Copy all indices into a `Vec<u32>`.
    pub fn to_vec_u32(&self) -> Vec<u32> {
        match self {
            Self::U16(v) => v.iter().map(|&x| u32::from(x)).collect(),
            Self::U32(v) => v.clone(),
        }
    }

    /// Raw index bytes in native endianness, ready for a GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::U16(v) => bytemuck::cast_slice(v),
            Self::U32(v) => bytemuck::cast_slice(v),
        }
    }

    /// Iterate over complete triangles. A trailing partial triple is ignored.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..self.len() / 3).filter_map(move |t| {
            let base = t * 3;
            Some([self.get(base)?, self.get(base + 1)?, self.get(base + 2)?])
        })
    }
}

impl From<Vec<u16>> for Indices {
    fn from(v: Vec<u16>) -> Self {
        Self::U16(v)
    }
}

impl From<Vec<u32>> for Indices {
    fn from(v: Vec<u32>) -> Self {
        Self::U32(v)
    }
}
