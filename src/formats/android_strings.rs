//! Support for Android `strings.xml` resource files.
//!
//! Only `<string>` elements are read; `<plurals>`, `<string-array>` and comments are
//! skipped. Provides parsing, serialization, and conversion to/from [`StringTable`].

use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use quick_xml::{
    Reader, Writer,
    escape::partial_escape,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use serde::Serialize;

use crate::{
    error::Error,
    traits::Parser,
    types::{DuplicateKeyPolicy, StringEntry, StringTable},
};

/// File name of every per-language resource file.
pub const STRINGS_FILE_NAME: &str = "strings.xml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Format {
    pub language: String,
    pub strings: Vec<StringResource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringResource {
    pub name: String,
    pub value: String,
    pub translatable: Option<bool>,
}

impl Parser for Format {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let mut xml_reader = Reader::from_reader(reader);
        // Whitespace inside <string> is content and must survive.
        xml_reader.config_mut().trim_text(false);

        let mut buf = Vec::new();
        let mut resources = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"string" => {
                    let (name, translatable) = parse_attributes(e)?;
                    let value = read_text_content(&mut xml_reader)?;
                    resources.push(StringResource {
                        name,
                        value,
                        translatable,
                    });
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"string" => {
                    let (name, translatable) = parse_attributes(e)?;
                    resources.push(StringResource {
                        name,
                        value: String::new(),
                        translatable,
                    });
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => return Err(Error::XmlParse(e)),
            }
            buf.clear();
        }
        Ok(Format {
            language: String::new(), // strings.xml does not contain language metadata
            strings: resources,
        })
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', 4);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;

        for sr in &self.strings {
            let mut elem = BytesStart::new("string");
            elem.push_attribute(("name", sr.name.as_str()));
            if sr.translatable == Some(false) {
                elem.push_attribute(("translatable", "false"));
            }

            xml_writer.write_event(Event::Start(elem))?;
            // An empty text event keeps `</string>` on the same line.
            xml_writer.write_event(Event::Text(BytesText::from_escaped(partial_escape(
                &sr.value,
            ))))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        xml_writer.get_mut().write_all(b"\n")?;
        Ok(())
    }
}

impl From<&StringTable> for Format {
    fn from(table: &StringTable) -> Self {
        Self {
            language: table.language.clone(),
            strings: table
                .iter()
                .map(|entry| StringResource {
                    name: entry.key.clone(),
                    value: entry.value.clone(),
                    translatable: (!entry.translatable).then_some(false),
                })
                .collect(),
        }
    }
}

impl Format {
    /// Converts into a table, applying `policy` to repeated names.
    pub fn into_table(self, policy: DuplicateKeyPolicy) -> Result<StringTable, Error> {
        StringTable::from_entries(
            self.language,
            self.strings.into_iter().map(|sr| StringEntry {
                key: sr.name,
                value: sr.value,
                translatable: sr.translatable.unwrap_or(true),
            }),
            policy,
        )
    }
}

/// Reads `path` into a table labelled `language`.
pub fn read_table<P: AsRef<Path>>(
    path: P,
    language: impl Into<String>,
    policy: DuplicateKeyPolicy,
) -> Result<StringTable, Error> {
    let mut format = Format::read_from(path)?;
    format.language = language.into();
    format.into_table(policy)
}

/// Writes `table` to `<output_root>/<language>/<file_name>`, creating the directory.
///
/// Any previous file at that path is replaced.
pub fn write_table<P: AsRef<Path>>(
    table: &StringTable,
    output_root: P,
    file_name: &str,
) -> Result<PathBuf, Error> {
    let dir = output_root.as_ref().join(&table.language);
    fs::create_dir_all(&dir)?;
    let path = dir.join(file_name);
    Format::from(table).write_to(&path)?;
    Ok(path)
}

fn parse_attributes(e: &BytesStart) -> Result<(String, Option<bool>), Error> {
    let mut name = None;
    let mut translatable = None;

    for attr in e.attributes().with_checks(false) {
        let attr = attr.map_err(|e| Error::DataMismatch(e.to_string()))?;
        match attr.key.as_ref() {
            b"name" => name = Some(attr.unescape_value()?.to_string()),
            b"translatable" => {
                let v = attr.unescape_value()?;
                translatable = Some(v.trim().eq_ignore_ascii_case("true"));
            }
            _ => {}
        }
    }
    let name =
        name.ok_or_else(|| Error::InvalidResource("string tag missing 'name'".to_string()))?;
    Ok((name, translatable))
}

/// Collects all text and CDATA up to the closing `</string>`, dropping nested tags.
fn read_text_content<R: BufRead>(xml_reader: &mut Reader<R>) -> Result<String, Error> {
    let mut buf = Vec::new();
    let mut value = String::new();
    let mut depth = 0usize;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => value.push_str(&e.unescape()?),
            Ok(Event::CData(e)) => value.push_str(&String::from_utf8_lossy(&e)),
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) if depth == 0 => break,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => return Err(Error::InvalidResource("Unexpected EOF".to_string())),
            Ok(_) => (),
            Err(e) => return Err(Error::XmlParse(e)),
        }
        buf.clear();
    }
    Ok(value)
}
