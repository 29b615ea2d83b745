use bstr::ByteSlice;

use lazy_static::lazy_static;
use regex::bytes::Regex;

/// A SAM-style `TAG:TYPE:VALUE` field trailing a segment record.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: [u8; 2],
    pub value: TagValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl TagValue {
    /// Numeric view of the value; integers widen to floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagValue::Int(x) => Some(*x as f64),
            TagValue::Float(x) => Some(*x),
            TagValue::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            TagValue::Int(x) => Some(*x),
            TagValue::Float(x) => Some(x.trunc() as i64),
            TagValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl Tag {
    /// Parses a tag from a bytestring in the format
    /// <TAG>:<TYPE>:<VALUE>. Unknown types keep their raw text.
    pub fn parse(input: &[u8]) -> Option<Self> {
        lazy_static! {
            static ref RE_TAG: Regex =
                Regex::new(r"(?-u)^[A-Za-z][A-Za-z0-9]$").unwrap();
            static ref RE_INT: Regex = Regex::new(r"(?-u)[-+]?[0-9]+").unwrap();
            static ref RE_FLOAT: Regex =
                Regex::new(r"(?-u)[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?")
                    .unwrap();
        }

        let mut fields = input.splitn_str(3, b":");
        let name = fields.next()?;
        let kind = fields.next()?;
        let contents = fields.next()?;
        if !RE_TAG.is_match(name) {
            return None;
        }

        let number = |re: &Regex| {
            re.find(contents)
                .and_then(|m| m.as_bytes().to_str().ok())
                .map(str::to_string)
        };

        let value = match kind {
            b"i" => number(&*RE_INT)?.parse().ok().map(TagValue::Int)?,
            b"f" => number(&*RE_FLOAT)?.parse().ok().map(TagValue::Float)?,
            _ => TagValue::Text(contents.to_str_lossy().into_owned()),
        };

        Some(Tag {
            name: [name[0], name[1]],
            value,
        })
    }

    /// Tag names compare case-insensitively, assemblers write both
    /// `dp` and `DP`.
    #[inline]
    pub fn is(&self, name: &[u8]) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// The tags of one record, in the order they were written.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Tags(Vec<Tag>);

impl Tags {
    pub fn parse<T>(input: T) -> Self
    where
        T: IntoIterator,
        T::Item: AsRef<[u8]>,
    {
        Tags(
            input
                .into_iter()
                .filter_map(|f| Tag::parse(f.as_ref()))
                .collect(),
        )
    }

    pub fn get(&self, name: &[u8]) -> Option<&TagValue> {
        self.0.iter().find(|t| t.is(name)).map(|t| &t.value)
    }

    pub fn get_f64(&self, name: &[u8]) -> Option<f64> {
        self.get(name).and_then(TagValue::as_f64)
    }

    pub fn get_i64(&self, name: &[u8]) -> Option<i64> {
        self.get(name).and_then(TagValue::as_i64)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
