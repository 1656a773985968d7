// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest parsing.
//!
//! A manifest is a markdown file with optional YAML front matter. Each
//! level-2 heading whose text is a code span (`` ## `path/to/file` ``)
//! names a generated file; the first fenced code block after the heading
//! carries that file's content verbatim. Repeating the same heading
//! continues the same entry.

use std::path::{Component, Path, PathBuf};

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use serde::Deserialize;

use crate::error::{Error, Result};

/// A parsed manifest: front-matter options plus generated-file entries.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Absolute path the manifest was loaded from.
    pub path: PathBuf,
    /// Front-matter options, all optional.
    pub options: ManifestOptions,
    /// Generated files, in manifest order.
    pub entries: Vec<FileEntry>,
}

/// Front-matter options. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManifestOptions {
    /// Maintain .gitignore after writing files.
    pub gitignore: Option<bool>,
    /// Maintain .vscode/settings.json after writing files.
    pub vscode: Option<bool>,
    /// Base path under which symlinks are placed.
    pub base: Option<String>,
}

/// One generated file: project-relative name plus verbatim content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub content: String,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Manifest> {
        let content = std::fs::read_to_string(path)?;
        Manifest::parse(path, &content)
    }

    /// Parse manifest text. `path` is used for error reporting only.
    pub fn parse(path: &Path, content: &str) -> Result<Manifest> {
        let mut md_options = Options::empty();
        md_options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
        let parser = Parser::new_ext(content, md_options);

        let mut front_matter = String::new();
        let mut in_meta = false;
        let mut in_heading = false;
        let mut in_fence = false;
        let mut heading_name: Option<String> = None;
        let mut fence_buf = String::new();
        let mut entries: Vec<PartialEntry> = Vec::new();

        for event in parser {
            match event {
                Event::Start(Tag::MetadataBlock(_)) => in_meta = true,
                Event::End(TagEnd::MetadataBlock(_)) => in_meta = false,
                Event::Start(Tag::Heading { level: HeadingLevel::H2, .. }) => {
                    in_heading = true;
                    heading_name = None;
                }
                Event::Code(code) if in_heading => heading_name = Some(code.into_string()),
                Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                    in_heading = false;
                    if let Some(name) = heading_name.take() {
                        open_entry(path, &mut entries, name)?;
                    }
                }
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(_))) if !in_meta => {
                    in_fence = true;
                    fence_buf.clear();
                }
                Event::End(TagEnd::CodeBlock) if in_fence => {
                    in_fence = false;
                    match entries.last_mut() {
                        None => {
                            return Err(Error::Manifest {
                                path: path.to_path_buf(),
                                message: "code block has no file heading (## `path`) before it"
                                    .to_string(),
                            });
                        }
                        // Only the first block under a heading counts.
                        Some(entry) if entry.content.is_none() => {
                            entry.content = Some(std::mem::take(&mut fence_buf));
                        }
                        Some(_) => {}
                    }
                }
                Event::Text(text) => {
                    if in_meta {
                        front_matter.push_str(&text);
                    } else if in_fence {
                        fence_buf.push_str(&text);
                    }
                }
                _ => {}
            }
        }

        if let Some(last) = entries.last()
            && last.content.is_none()
        {
            return Err(missing_block(path, &last.name));
        }

        let options = parse_front_matter(path, &front_matter)?;
        let entries = entries
            .into_iter()
            .map(|e| FileEntry { name: e.name, content: e.content.unwrap_or_default() })
            .collect();

        Ok(Manifest { path: path.to_path_buf(), options, entries })
    }

    /// Project root the manifest applies to (its parent directory).
    pub fn root(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}

/// Entry under construction; content arrives after the heading.
struct PartialEntry {
    name: String,
    content: Option<String>,
}

/// Start a new entry, or continue the previous one when the name repeats.
fn open_entry(path: &Path, entries: &mut Vec<PartialEntry>, name: String) -> Result<()> {
    validate_name(&name)?;
    if let Some(last) = entries.last() {
        if last.content.is_none() && last.name != name {
            return Err(missing_block(path, &last.name));
        }
        if last.name == name {
            return Ok(());
        }
    }
    entries.push(PartialEntry { name, content: None });
    Ok(())
}

fn missing_block(path: &Path, name: &str) -> Error {
    Error::Manifest {
        path: path.to_path_buf(),
        message: format!("{name} does not contain any code block"),
    }
}

/// Entry names must stay inside the project root.
fn validate_name(name: &str) -> Result<()> {
    let path = Path::new(name);
    let safe = !name.is_empty()
        && path.is_relative()
        && path.components().all(|c| matches!(c, Component::Normal(_)));
    if safe { Ok(()) } else { Err(Error::UnsafeEntryName(name.to_string())) }
}

fn parse_front_matter(path: &Path, text: &str) -> Result<ManifestOptions> {
    if text.trim().is_empty() {
        return Ok(ManifestOptions::default());
    }
    serde_yaml::from_str(text)
        .map_err(|source| Error::FrontMatter { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
