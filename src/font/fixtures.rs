//! In-memory sfnt fonts for tests

pub const HEAD_MAGIC: u32 = 0x5F0F3CF5;

/// Assembles a minimal sfnt container from raw tables
#[derive(Debug, Clone, Default)]
pub struct SfntBuilder {
    tables: Vec<([u8; 4], Vec<u8>)>,
    min_len: usize,
}

impl SfntBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// head + name + cmap, padded past the size threshold
    pub fn valid(family: &str) -> Self {
        Self::new()
            .table(b"head", head_table(HEAD_MAGIC))
            .table(b"name", name_table(&[(1, family)]))
            .table(b"cmap", cmap_table())
            .min_len(4096)
    }

    pub fn table(mut self, tag: &[u8; 4], data: Vec<u8>) -> Self {
        self.tables.retain(|(t, _)| t != tag);
        self.tables.push((*tag, data));
        self
    }

    pub fn without(mut self, tag: &[u8; 4]) -> Self {
        self.tables.retain(|(t, _)| t != tag);
        self
    }

    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = len;
        self
    }

    pub fn build(&self) -> Vec<u8> {
        self.build_with_version(*b"OTTO")
    }

    /// Same layout under a different sfnt version tag, e.g. `ttcf`
    pub fn build_with_version(&self, version: [u8; 4]) -> Vec<u8> {
        let mut tables = self.tables.clone();
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = Vec::new();
        out.extend_from_slice(&version);
        out.extend_from_slice(&(tables.len() as u16).to_be_bytes());
        out.extend_from_slice(&[0u8; 6]);

        let mut offset = align4(12 + 16 * tables.len());
        let mut body = Vec::new();
        for (tag, data) in &tables {
            out.extend_from_slice(tag);
            out.extend_from_slice(&0u32.to_be_bytes());
            out.extend_from_slice(&(offset as u32).to_be_bytes());
            out.extend_from_slice(&(data.len() as u32).to_be_bytes());

            body.extend_from_slice(data);
            body.resize(align4(body.len()), 0);
            offset = align4(12 + 16 * tables.len()) + body.len();
        }

        out.resize(align4(out.len()), 0);
        out.extend_from_slice(&body);
        if out.len() < self.min_len {
            out.resize(self.min_len, 0);
        }
        out
    }
}

fn align4(n: usize) -> usize {
    (n + 3) & !3
}

/// A 54 byte version 1.0 `head` table
pub fn head_table(magic: u32) -> Vec<u8> {
    let mut t = Vec::with_capacity(54);
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // version
    t.extend_from_slice(&0x0001_0000u32.to_be_bytes()); // fontRevision
    t.extend_from_slice(&0u32.to_be_bytes()); // checksumAdjustment
    t.extend_from_slice(&magic.to_be_bytes());
    t.extend_from_slice(&0u16.to_be_bytes()); // flags
    t.extend_from_slice(&1000u16.to_be_bytes()); // unitsPerEm
    t.extend_from_slice(&[0u8; 16]); // created, modified
    t.extend_from_slice(&[0u8; 8]); // bbox
    t.extend_from_slice(&[0u8; 6]); // macStyle, lowestRecPPEM, fontDirectionHint
    t.extend_from_slice(&0i16.to_be_bytes()); // indexToLocFormat
    t.extend_from_slice(&0i16.to_be_bytes()); // glyphDataFormat
    t
}

/// One record for [`raw_name_table`], stored verbatim
#[derive(Debug, Clone)]
pub struct RawName {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub name_id: u16,
    pub bytes: Vec<u8>,
    /// Storage offset to write instead of the real one
    pub offset_override: Option<u16>,
}

impl RawName {
    pub fn new(platform_id: u16, encoding_id: u16, name_id: u16, bytes: &[u8]) -> Self {
        Self {
            platform_id,
            encoding_id,
            name_id,
            bytes: bytes.to_vec(),
            offset_override: None,
        }
    }

    pub fn at_offset(mut self, offset: u16) -> Self {
        self.offset_override = Some(offset);
        self
    }
}

/// A version 0 `name` table with Windows Unicode BMP records
pub fn name_table(records: &[(u16, &str)]) -> Vec<u8> {
    let raw: Vec<RawName> = records
        .iter()
        .map(|(name_id, text)| {
            let encoded: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
            RawName::new(3, 1, *name_id, &encoded)
        })
        .collect();
    raw_name_table(&raw)
}

/// A version 0 `name` table with arbitrary platform/encoding records
pub fn raw_name_table(records: &[RawName]) -> Vec<u8> {
    let storage_offset = 6 + 12 * records.len();
    let mut header = Vec::new();
    header.extend_from_slice(&0u16.to_be_bytes());
    header.extend_from_slice(&(records.len() as u16).to_be_bytes());
    header.extend_from_slice(&(storage_offset as u16).to_be_bytes());

    let mut storage = Vec::new();
    for record in records {
        let offset = record.offset_override.unwrap_or(storage.len() as u16);
        header.extend_from_slice(&record.platform_id.to_be_bytes());
        header.extend_from_slice(&record.encoding_id.to_be_bytes());
        header.extend_from_slice(&0u16.to_be_bytes()); // language
        header.extend_from_slice(&record.name_id.to_be_bytes());
        header.extend_from_slice(&(record.bytes.len() as u16).to_be_bytes());
        header.extend_from_slice(&offset.to_be_bytes());
        storage.extend_from_slice(&record.bytes);
    }

    header.extend_from_slice(&storage);
    header
}

/// An empty version 0 `cmap` table
pub fn cmap_table() -> Vec<u8> {
    vec![0, 0, 0, 0]
}
