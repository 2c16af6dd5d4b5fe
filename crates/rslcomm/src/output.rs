use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use rslcomm_driver::{BroadcastPacket, PacketKind};
use rslcomm_registers::{DecodeRule, DecodedRegister, RegisterDescriptor, RegisterSpace, RegisterValue};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    /// Comma-separated rows; a header precedes each change of record type.
    Csv,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RegisterOutput<'a> {
    name: &'a str,
    address: String,
    space: RegisterSpace,
    raw: u32,
    value: &'a RegisterValue,
}

#[derive(Serialize)]
struct WriteOutput<'a> {
    name: &'a str,
    address: String,
    space: RegisterSpace,
    written: &'a str,
}

#[derive(Serialize)]
struct DescriptorOutput<'a> {
    name: &'a str,
    address: String,
    space: RegisterSpace,
    access: &'a str,
    rule: &'a str,
    fields: Vec<&'a str>,
}

pub fn print_register(descriptor: &RegisterDescriptor, register: &DecodedRegister, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = RegisterOutput {
                name: register.name,
                address: hex(register.address),
                space: descriptor.space,
                raw: register.raw,
                value: &register.value,
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["REGISTER", "ADDRESS", "RAW", "VALUE"]);
            table.add_row(vec![
                register.name.to_string(),
                address_label(descriptor),
                format!("{:#010x}", register.raw),
                multiline_value(&register.value),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{} ({}) = {} [raw {:#010x}]",
                register.name,
                address_label(descriptor),
                register.value,
                register.raw
            );
        }
        OutputFormat::Csv => {
            println!("name,address,raw,value");
            println!(
                "{},{},{},{}",
                register.name,
                hex(register.address),
                register.raw,
                csv_field(&register.value.to_string())
            );
        }
    }
}

/// Confirmation for a write or command. `written` is the value as typed.
pub fn print_written(descriptor: &RegisterDescriptor, written: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = WriteOutput {
                name: descriptor.name,
                address: hex(descriptor.address),
                space: descriptor.space,
                written,
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["REGISTER", "ADDRESS", "WRITTEN"]);
            table.add_row(vec![
                descriptor.name.to_string(),
                address_label(descriptor),
                written.to_string(),
            ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{} ({}) <- {written}", descriptor.name, address_label(descriptor));
        }
        OutputFormat::Csv => {
            println!("name,address,written");
            println!(
                "{},{},{}",
                descriptor.name,
                hex(descriptor.address),
                csv_field(written)
            );
        }
    }
}

pub fn print_descriptors(descriptors: &[&RegisterDescriptor], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<DescriptorOutput<'_>> = descriptors
                .iter()
                .map(|descriptor| DescriptorOutput {
                    name: descriptor.name,
                    address: hex(descriptor.address),
                    space: descriptor.space,
                    access: descriptor.access.label(),
                    rule: rule_label(descriptor.rule),
                    fields: field_names(descriptor.rule),
                })
                .collect();
            print_json(&out);
        }
        OutputFormat::Table => {
            let mut table = new_table(vec!["REGISTER", "ADDRESS", "ACCESS", "TYPE", "FIELDS"]);
            for descriptor in descriptors {
                table.add_row(vec![
                    descriptor.name.to_string(),
                    address_label(descriptor),
                    descriptor.access.label().to_string(),
                    rule_label(descriptor.rule).to_string(),
                    field_names(descriptor.rule).join(" "),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for descriptor in descriptors {
                println!(
                    "{:<40} {:<14} {:<3} {}",
                    descriptor.name,
                    address_label(descriptor),
                    descriptor.access.label(),
                    rule_label(descriptor.rule)
                );
            }
        }
        OutputFormat::Csv => {
            println!("name,address,space,access,type");
            for descriptor in descriptors {
                println!(
                    "{},{},{},{},{}",
                    descriptor.name,
                    hex(descriptor.address),
                    descriptor.space,
                    descriptor.access.label(),
                    rule_label(descriptor.rule)
                );
            }
        }
    }
}

/// Prints broadcast packets one after another.
///
/// CSV output repeats the header whenever the packet kind changes, since
/// each kind has its own columns.
pub struct BroadcastPrinter {
    format: OutputFormat,
    csv_kind: Option<PacketKind>,
}

impl BroadcastPrinter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            csv_kind: None,
        }
    }

    pub fn print(&mut self, packet: &BroadcastPacket) {
        let value = match serde_json::to_value(packet) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(%err, kind = %packet.kind(), "broadcast not serializable");
                return;
            }
        };

        match self.format {
            OutputFormat::Json => println!("{value}"),
            OutputFormat::Table => {
                let mut table = new_table(vec!["FIELD", "VALUE"]);
                for (name, field) in flatten(&value) {
                    table.add_row(vec![name, field]);
                }
                println!("{table}");
            }
            OutputFormat::Pretty => {
                let fields: Vec<String> = flatten(&value)
                    .into_iter()
                    .filter(|(name, _)| name != "kind")
                    .map(|(name, field)| format!("{name}={field}"))
                    .collect();
                println!("{:<12} {}", packet.kind().name(), fields.join(" "));
            }
            OutputFormat::Csv => {
                let fields = flatten(&value);
                if self.csv_kind != Some(packet.kind()) {
                    let header: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
                    println!("{}", header.join(","));
                    self.csv_kind = Some(packet.kind());
                }
                let row: Vec<String> = fields.iter().map(|(_, field)| csv_field(field)).collect();
                println!("{}", row.join(","));
            }
        }
    }
}

/// Flatten nested JSON objects into dotted `(path, value)` pairs.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    flatten_into("", value, &mut out);
    out
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, child, out);
            }
        }
        Value::String(text) => out.push((prefix.to_string(), text.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

pub fn rule_label(rule: DecodeRule) -> &'static str {
    match rule {
        DecodeRule::Uint => "uint",
        DecodeRule::Int => "int",
        DecodeRule::Float => "float",
        DecodeRule::Text => "text",
        DecodeRule::Fields(_) => "fields",
    }
}

fn field_names(rule: DecodeRule) -> Vec<&'static str> {
    match rule {
        DecodeRule::Fields(fields) => fields.iter().map(|field| field.name).collect(),
        _ => Vec::new(),
    }
}

fn multiline_value(value: &RegisterValue) -> String {
    match value {
        RegisterValue::Fields(fields) => fields
            .iter()
            .map(|field| format!("{}={}", field.name, field.value))
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}

fn address_label(descriptor: &RegisterDescriptor) -> String {
    match descriptor.space {
        RegisterSpace::Main => hex(descriptor.address),
        RegisterSpace::Hidden => format!("{} hidden", hex(descriptor.address)),
    }
}

fn hex(address: u8) -> String {
    format!("{address:#04x}")
}

fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flattens_nested_objects_with_dotted_paths() {
        let value = json!({
            "kind": "all_raw",
            "gyro_1": { "x": 1, "y": -2 },
            "temperature": { "celsius": 24.5 }
        });
        let flat = flatten(&value);
        assert!(flat.contains(&("kind".to_string(), "all_raw".to_string())));
        assert!(flat.contains(&("gyro_1.y".to_string(), "-2".to_string())));
        assert!(flat.contains(&("temperature.celsius".to_string(), "24.5".to_string())));
    }

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("12"), "12");
        assert_eq!(csv_field("A=1, B=2"), "\"A=1, B=2\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn labels_rules() {
        assert_eq!(rule_label(DecodeRule::Float), "float");
        assert_eq!(rule_label(DecodeRule::Fields(&[])), "fields");
    }
}
