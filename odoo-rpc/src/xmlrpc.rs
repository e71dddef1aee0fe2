//! # XML-RPC Codec
//!
//! Minimal XML-RPC support for the legacy family: encoding a `<methodCall>` from JSON
//! values, and decoding a `<methodResponse>` back into a JSON value or a fault.
//!
//! ## Type mapping
//!
//! | JSON                     | XML-RPC                             |
//! |--------------------------|-------------------------------------|
//! | `null`                   | `<nil/>`                            |
//! | `bool`                   | `<boolean>` (`1`/`0`)               |
//! | integer fitting in `i32` | `<int>`                             |
//! | wider integer            | `<i8>`                              |
//! | float                    | `<double>`                          |
//! | string                   | `<string>`                          |
//! | array                    | `<array><data>...</data></array>`   |
//! | object                   | `<struct>`, members in key order    |
//!
//! When decoding, `dateTime.iso8601` and `base64` values are kept as their textual form.
use quick_xml::Reader;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use serde_json::{Map, Number, Value};

/// Errors produced while decoding an XML-RPC document.
#[derive(Debug, thiserror::Error)]
pub enum XmlRpcError {
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("Invalid UTF-8 in character data")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Unexpected element '<{0}>'")]
    UnexpectedElement(String),
    #[error("Missing element '<{0}>'")]
    MissingElement(&'static str),
    #[error("Invalid <{kind}> value '{text}'")]
    InvalidScalar { kind: String, text: String },
}

/// A fault reported by the remote method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlRpcFault {
    pub fault_code: i64,
    pub fault_string: String,
}

/// A decoded `<methodResponse>`.
#[derive(Debug, Clone, PartialEq)]
pub enum MethodResponse {
    Success(Value),
    Fault(XmlRpcFault),
}

/// Encodes a `<methodCall>` document.
pub fn encode_method_call(method: &str, params: &[Value]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?><methodCall><methodName>"#);
    xml.push_str(&escape(method));
    xml.push_str("</methodName><params>");
    for param in params {
        xml.push_str("<param>");
        encode_value(param, &mut xml);
        xml.push_str("</param>");
    }
    xml.push_str("</params></methodCall>");
    xml
}

fn encode_value(value: &Value, xml: &mut String) {
    xml.push_str("<value>");
    match value {
        Value::Null => xml.push_str("<nil/>"),
        Value::Bool(b) => {
            xml.push_str(if *b {
                "<boolean>1</boolean>"
            } else {
                "<boolean>0</boolean>"
            });
        }
        Value::Number(n) => encode_number(n, xml),
        Value::String(s) => {
            xml.push_str("<string>");
            xml.push_str(&escape(s.as_str()));
            xml.push_str("</string>");
        }
        Value::Array(items) => {
            xml.push_str("<array><data>");
            for item in items {
                encode_value(item, xml);
            }
            xml.push_str("</data></array>");
        }
        Value::Object(members) => {
            xml.push_str("<struct>");
            for (name, member) in members {
                xml.push_str("<member><name>");
                xml.push_str(&escape(name.as_str()));
                xml.push_str("</name>");
                encode_value(member, xml);
                xml.push_str("</member>");
            }
            xml.push_str("</struct>");
        }
    }
    xml.push_str("</value>");
}

fn encode_number(n: &Number, xml: &mut String) {
    match n.as_i64() {
        Some(i) if i32::try_from(i).is_ok() => xml.push_str(&format!("<int>{i}</int>")),
        Some(i) => xml.push_str(&format!("<i8>{i}</i8>")),
        // Floats, and unsigned integers beyond i64.
        None => xml.push_str(&format!("<double>{}</double>", n.as_f64().unwrap_or_default())),
    }
}

/// A parsed XML element. Text is kept verbatim, including whitespace.
#[derive(Debug)]
enum Node {
    Element { name: String, children: Vec<Node> },
    Text(String),
}

impl Node {
    fn elements(children: &[Node]) -> impl Iterator<Item = (&str, &[Node])> {
        children.iter().filter_map(|node| match node {
            Node::Element { name, children } => Some((name.as_str(), children.as_slice())),
            Node::Text(_) => None,
        })
    }

    fn text(children: &[Node]) -> String {
        children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element { .. } => None,
            })
            .collect()
    }
}

fn parse_document(xml: &str) -> Result<Vec<Node>, XmlRpcError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<(String, Vec<Node>)> = Vec::new();
    let mut roots = Vec::new();

    loop {
        let node = match reader.read_event()? {
            Event::Start(start) => {
                let name = String::from_utf8(start.name().as_ref().to_vec())?;
                stack.push((name, Vec::new()));
                continue;
            }
            Event::End(_) => match stack.pop() {
                Some((name, children)) => Node::Element { name, children },
                None => continue,
            },
            Event::Empty(empty) => Node::Element {
                name: String::from_utf8(empty.name().as_ref().to_vec())?,
                children: Vec::new(),
            },
            Event::Text(text) => {
                Node::Text(text.unescape().map_err(quick_xml::Error::from)?.into_owned())
            }
            Event::CData(cdata) => Node::Text(String::from_utf8(cdata.into_inner().into_owned())?),
            Event::Eof => break,
            _ => continue,
        };

        match stack.last_mut() {
            Some((_, children)) => children.push(node),
            None => roots.push(node),
        }
    }

    Ok(roots)
}

fn child<'a>(children: &'a [Node], name: &'static str) -> Result<&'a [Node], XmlRpcError> {
    Node::elements(children)
        .find(|(element, _)| *element == name)
        .map(|(_, children)| children)
        .ok_or(XmlRpcError::MissingElement(name))
}

/// Decodes a `<methodResponse>` document.
pub fn decode_method_response(xml: &str) -> Result<MethodResponse, XmlRpcError> {
    let roots = parse_document(xml)?;
    let response = child(&roots, "methodResponse")?;

    match Node::elements(response).next() {
        Some(("params", params)) => {
            let param = child(params, "param")?;
            Ok(MethodResponse::Success(decode_value(child(param, "value")?)?))
        }
        Some(("fault", fault)) => {
            let value = decode_value(child(fault, "value")?)?;
            Ok(MethodResponse::Fault(fault_from_value(value)))
        }
        Some((other, _)) => Err(XmlRpcError::UnexpectedElement(other.to_string())),
        None => Err(XmlRpcError::MissingElement("params")),
    }
}

// A fault code that is not an integer can not match any known code.
fn fault_from_value(value: Value) -> XmlRpcFault {
    XmlRpcFault {
        fault_code: value.get("faultCode").and_then(Value::as_i64).unwrap_or(0),
        fault_string: value
            .get("faultString")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

/// Decodes the children of a `<value>` element.
fn decode_value(children: &[Node]) -> Result<Value, XmlRpcError> {
    let Some((kind, inner)) = Node::elements(children).next() else {
        // No type element: the value is a string.
        return Ok(Value::String(Node::text(children)));
    };

    let text = Node::text(inner);
    let invalid = |text: &str| XmlRpcError::InvalidScalar {
        kind: kind.to_string(),
        text: text.to_string(),
    };

    let value = match kind {
        "int" | "i4" | "i8" => Value::from(text.trim().parse::<i64>().map_err(|_| invalid(&text))?),
        "boolean" => match text.trim() {
            "1" => Value::Bool(true),
            "0" => Value::Bool(false),
            _ => return Err(invalid(&text)),
        },
        "double" => Value::from(text.trim().parse::<f64>().map_err(|_| invalid(&text))?),
        "string" => Value::String(text),
        "nil" => Value::Null,
        "dateTime.iso8601" | "base64" => Value::String(text.trim().to_string()),
        "array" => {
            let data = child(inner, "data")?;
            Value::Array(
                Node::elements(data)
                    .filter(|(name, _)| *name == "value")
                    .map(|(_, value)| decode_value(value))
                    .collect::<Result<_, _>>()?,
            )
        }
        "struct" => {
            let mut members = Map::new();
            for (_, member) in Node::elements(inner).filter(|(name, _)| *name == "member") {
                let name = Node::text(child(member, "name")?);
                members.insert(name, decode_value(child(member, "value")?)?);
            }
            Value::Object(members)
        }
        other => return Err(XmlRpcError::UnexpectedElement(other.to_string())),
    };

    Ok(value)
}
