//! # Source Maps
//!
//! Implements Source Map V3 mapping assembly: generated-position to
//! original-position records, delta-encoded and written out as Base64 VLQ
//! (spec §4.5). The printer feeds this module one mapping per token or
//! statement (depending on `MappingGranularity`); it never looks at the
//! filesystem or decides *which* positions to record — that's the
//! printer's job.

use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Source Map V3 structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMap {
    pub version: u8,
    pub file: Option<String>,
    #[serde(rename = "sourceRoot", skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    pub sources: Vec<String>,
    #[serde(rename = "sourcesContent", skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<String>>,
    pub names: Vec<String>,
    pub mappings: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SourceMapSection>>,
    #[serde(skip)]
    mapping_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMapSection {
    pub offset: SourceMapOffset,
    pub map: SourceMap,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMapOffset {
    pub line: u32,
    pub column: u32,
}

/// A single, not-yet-encoded mapping record (spec §4.5 "mapping record").
#[derive(Debug, Clone, PartialEq)]
pub struct MappingSegment {
    pub generated_column: u32,
    pub source_index: Option<u32>,
    pub original_line: Option<u32>,
    pub original_column: Option<u32>,
    pub name_index: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone)]
pub struct Mapping {
    pub generated: Position,
    pub original: Option<Position>,
    pub source_index: Option<u32>,
    pub name_index: Option<u32>,
}

/// Accumulates mappings while the printer runs and assembles the final
/// `SourceMap` chunk on `build()`. Named `ChunkBuilder` per the "chunk"
/// terminology of spec §4.5 — the opaque chunk-joining step that stitches
/// multiple chunks into a bundle-wide map lives outside this crate.
pub struct ChunkBuilder {
    sources: Vec<String>,
    sources_content: Option<Vec<String>>,
    names: Vec<String>,
    mappings: HashMap<u32, Vec<MappingSegment>>,
    source_lookup: HashMap<String, u32>,
    name_lookup: HashMap<String, u32>,
    mapping_count: usize,
}

pub type SourceMapBuilder = ChunkBuilder;

impl SourceMap {
    pub fn new() -> Self {
        Self {
            version: 3,
            file: None,
            source_root: None,
            sources: Vec::new(),
            sources_content: None,
            names: Vec::new(),
            mappings: String::new(),
            sections: None,
            mapping_count: 0,
        }
    }

    pub fn from_builder(builder: ChunkBuilder) -> Self {
        let mapping_count = builder.mapping_count;
        let mappings = encode_mappings(&builder.mappings);

        Self {
            version: 3,
            file: None,
            source_root: None,
            sources: builder.sources,
            sources_content: builder.sources_content,
            names: builder.names,
            mappings,
            sections: None,
            mapping_count,
        }
    }

    pub fn mapping_count(&self) -> usize {
        self.mapping_count
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Renders this map as a `data:` URL suitable for an inline
    /// `//# sourceMappingURL=` comment (spec §6 `SourceMapMode::Inline`).
    pub fn to_inline_data_url(&self) -> Result<String, serde_json::Error> {
        let json = self.to_json()?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(json.as_bytes());
        Ok(format!("data:application/json;charset=utf-8;base64,{}", encoded))
    }

    pub fn source_mapping_url_comment(&self, url: &str) -> String {
        format!("//# sourceMappingURL={}", url)
    }
}

impl Default for SourceMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkBuilder {
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            sources_content: None,
            names: Vec::new(),
            mappings: HashMap::new(),
            source_lookup: HashMap::new(),
            name_lookup: HashMap::new(),
            mapping_count: 0,
        }
    }

    pub fn add_source(&mut self, source_path: &str) -> u32 {
        if let Some(&index) = self.source_lookup.get(source_path) {
            return index;
        }
        let index = self.sources.len() as u32;
        self.sources.push(source_path.to_string());
        self.source_lookup.insert(source_path.to_string(), index);
        index
    }

    pub fn add_source_content(&mut self, content: &str) {
        self.sources_content.get_or_insert_with(Vec::new).push(content.to_string());
    }

    pub fn add_name(&mut self, name: &str) -> u32 {
        if let Some(&index) = self.name_lookup.get(name) {
            return index;
        }
        let index = self.names.len() as u32;
        self.names.push(name.to_string());
        self.name_lookup.insert(name.to_string(), index);
        index
    }

    pub fn add_mapping(&mut self, mapping: Mapping) {
        let segment = MappingSegment {
            generated_column: mapping.generated.column,
            source_index: mapping.source_index,
            original_line: mapping.original.map(|p| p.line),
            original_column: mapping.original.map(|p| p.column),
            name_index: mapping.name_index,
        };
        self.mappings.entry(mapping.generated.line).or_default().push(segment);
        self.mapping_count += 1;
    }

    pub fn build(self) -> SourceMap {
        SourceMap::from_builder(self)
    }
}

impl Default for ChunkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Delta-encodes mappings line by line into the Base64 VLQ `mappings` string
/// (spec §4.5). Fields within a segment are relative to the previous segment
/// *on the same line*; `source_index`/`original_line`/`original_column`/
/// `name_index` are relative across the whole map, per the V3 spec.
fn encode_mappings(mappings: &HashMap<u32, Vec<MappingSegment>>) -> String {
    let mut result = String::new();
    let mut prev_source_index = 0i32;
    let mut prev_original_line = 0i32;
    let mut prev_original_column = 0i32;
    let mut prev_name_index = 0i32;

    let mut sorted_lines: Vec<_> = mappings.keys().copied().collect();
    sorted_lines.sort_unstable();

    let max_line = sorted_lines.last().copied().unwrap_or(0);
    for line in 0..=max_line {
        if line > 0 {
            result.push(';');
        }
        let mut prev_generated_column = 0i32;

        let Some(segments) = mappings.get(&line) else { continue };
        let mut sorted_segments = segments.clone();
        sorted_segments.sort_by_key(|s| s.generated_column);

        for (seg_idx, segment) in sorted_segments.iter().enumerate() {
            if seg_idx > 0 {
                result.push(',');
            }

            result.push_str(&encode_vlq(segment.generated_column as i32 - prev_generated_column));
            prev_generated_column = segment.generated_column as i32;

            if let (Some(source_idx), Some(orig_line), Some(orig_col)) =
                (segment.source_index, segment.original_line, segment.original_column)
            {
                result.push_str(&encode_vlq(source_idx as i32 - prev_source_index));
                prev_source_index = source_idx as i32;

                result.push_str(&encode_vlq(orig_line as i32 - prev_original_line));
                prev_original_line = orig_line as i32;

                result.push_str(&encode_vlq(orig_col as i32 - prev_original_column));
                prev_original_column = orig_col as i32;

                if let Some(name_idx) = segment.name_index {
                    result.push_str(&encode_vlq(name_idx as i32 - prev_name_index));
                    prev_name_index = name_idx as i32;
                }
            }
        }
    }

    result
}

/// Encodes a signed integer as Base64 VLQ: sign in the low bit, 5 payload
/// bits per digit, high bit of each digit marks continuation.
fn encode_vlq(value: i32) -> String {
    let mut result = String::new();
    let sign = if value < 0 { 1 } else { 0 };
    let mut vlq = ((value.unsigned_abs()) << 1) | sign;

    loop {
        let mut digit = vlq & 0x1f;
        vlq >>= 5;
        if vlq != 0 {
            digit |= 0x20;
        }
        result.push(encode_base64_digit(digit as u8));
        if vlq == 0 {
            break;
        }
    }

    result
}

fn encode_base64_digit(value: u8) -> char {
    match value {
        0..=25 => (b'A' + value) as char,
        26..=51 => (b'a' + (value - 26)) as char,
        52..=61 => (b'0' + (value - 52)) as char,
        62 => '+',
        63 => '/',
        _ => unreachable!("VLQ digit is always 6 bits"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_map_creation() {
        let map = SourceMap::new();
        assert_eq!(map.version, 3);
        assert!(map.sources.is_empty());
        assert!(map.names.is_empty());
    }

    #[test]
    fn chunk_builder_dedups_sources_and_names() {
        let mut builder = ChunkBuilder::new();
        assert_eq!(builder.add_source("test.js"), 0);
        assert_eq!(builder.add_source("test.js"), 0);
        assert_eq!(builder.add_name("foo"), 0);
        assert_eq!(builder.sources.len(), 1);
        assert_eq!(builder.names.len(), 1);
    }

    #[test]
    fn mapping_addition_is_counted() {
        let mut builder = ChunkBuilder::new();
        let source_index = builder.add_source("test.js");
        builder.add_mapping(Mapping {
            generated: Position { line: 0, column: 0 },
            original: Some(Position { line: 0, column: 0 }),
            source_index: Some(source_index),
            name_index: None,
        });
        let map = builder.build();
        assert_eq!(map.mapping_count(), 1);
        assert!(!map.mappings.is_empty());
    }

    #[test]
    fn vlq_encoding_matches_known_values() {
        assert_eq!(encode_vlq(0), "A");
        assert_eq!(encode_vlq(1), "C");
        assert_eq!(encode_vlq(-1), "D");
    }

    #[test]
    fn base64_digit_encoding_covers_full_alphabet() {
        assert_eq!(encode_base64_digit(0), 'A');
        assert_eq!(encode_base64_digit(25), 'Z');
        assert_eq!(encode_base64_digit(26), 'a');
        assert_eq!(encode_base64_digit(51), 'z');
        assert_eq!(encode_base64_digit(52), '0');
        assert_eq!(encode_base64_digit(61), '9');
        assert_eq!(encode_base64_digit(62), '+');
        assert_eq!(encode_base64_digit(63), '/');
    }
}
