//! Core value types and operations.

use super::container::Container;
use std::cmp::Ordering;
use std::fmt;

/// Value is any entry a container can hold.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Identity-bearing reference to something outside the container tree.
    Handle(Handle),
    Container(Container),
}

/// HandleKind distinguishes the identity-bearing handle flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleKind {
    /// Reference to a live object.
    Object,
    /// Reference to an open resource.
    Resource,
    /// Reference to a resource that has been released. It has no stable
    /// identity and cannot be fingerprinted.
    ClosedResource,
}

/// Handle is an opaque reference compared by identity, never by content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    kind: HandleKind,
    id: u64,
}

impl Handle {
    /// Creates an object handle.
    pub fn object(id: u64) -> Self {
        Handle {
            kind: HandleKind::Object,
            id,
        }
    }

    /// Creates a resource handle.
    pub fn resource(id: u64) -> Self {
        Handle {
            kind: HandleKind::Resource,
            id,
        }
    }

    /// Creates a handle to a released resource.
    pub fn closed_resource(id: u64) -> Self {
        Handle {
            kind: HandleKind::ClosedResource,
            id,
        }
    }

    pub fn kind(&self) -> HandleKind {
        self.kind
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self.kind {
            HandleKind::Object => "object",
            HandleKind::Resource => "resource",
            HandleKind::ClosedResource => "resource (closed)",
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_handle(&self) -> bool {
        matches!(self, Value::Handle(_))
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Value::Container(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_handle(&self) -> Option<&Handle> {
        match self {
            Value::Handle(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_container_mut(&mut self) -> Option<&mut Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn into_container(self) -> Option<Container> {
        match self {
            Value::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Returns the name of the value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Handle(h) => h.type_name(),
            Value::Container(_) => "container",
        }
    }

    /// Compares two values in natural order.
    ///
    /// Values of different kinds order as null, bool, number, string, handle,
    /// container. Integers and floats compare numerically with each other; on a
    /// numeric tie the integer comes first so the order stays total.
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        fn type_order(v: &Value) -> u8 {
            match v {
                Value::Null => 0,
                Value::Bool(_) => 1,
                Value::Int(_) | Value::Float(_) => 2,
                Value::String(_) => 3,
                Value::Handle(_) => 4,
                Value::Container(_) => 5,
            }
        }

        let type_cmp = type_order(self).cmp(&type_order(other));
        if type_cmp != Ordering::Equal {
            return type_cmp;
        }

        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => {
                (*a as f64).total_cmp(b).then(Ordering::Less)
            }
            (Value::Float(a), Value::Int(b)) => {
                a.total_cmp(&(*b as f64)).then(Ordering::Greater)
            }
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Handle(a), Value::Handle(b)) => a.id.cmp(&b.id),
            (Value::Container(a), Value::Container(b)) => a.natural_cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Strict equality: same type and same content. Floats compare numerically,
/// except that every NaN equals every other NaN, matching their fingerprints.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Handle(a), Value::Handle(b)) => a == b,
            (Value::Container(a), Value::Container(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Handle(h) => write!(f, "{}#{}", h.type_name(), h.id),
            Value::Container(c) => write!(f, "{}", c),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Handle> for Value {
    fn from(h: Handle) -> Self {
        Value::Handle(h)
    }
}

impl From<Container> for Value {
    fn from(c: Container) -> Self {
        Value::Container(c)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Container(Container::list(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}
