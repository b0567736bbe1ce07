use crate::geometry::quantize;

/// A unit of cargo waiting to be loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    /// Unique identifier of this unit
    pub id: String,
    /// Groups identical package types, used by the stacking rules
    pub type_key: Option<String>,
    /// Size along the width axis
    pub w: f64,
    /// Size along the height axis
    pub h: f64,
    /// Size along the depth axis
    pub d: f64,
    pub weight: f64,
    /// Other items may be placed on top of this one
    pub stackable: bool,
    /// The footprint may be turned a quarter, swapping `w` and `d`
    pub rotatable: bool,
    /// Must form a vertical column with units of the same type
    pub must_stack: bool,
    /// Above the ground layer, may only rest on a footprint left by its own type
    pub self_stack_only: bool,
}

impl Item {
    pub fn new(id: impl Into<String>, w: f64, h: f64, d: f64) -> Self {
        Item {
            id: id.into(),
            type_key: None,
            w,
            h,
            d,
            weight: 0.0,
            stackable: false,
            rotatable: false,
            must_stack: false,
            self_stack_only: false,
        }
    }

    pub fn with_type_key(mut self, type_key: impl Into<String>) -> Self {
        self.type_key = Some(type_key.into());
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_stackable(mut self, stackable: bool) -> Self {
        self.stackable = stackable;
        self
    }

    pub fn with_rotatable(mut self, rotatable: bool) -> Self {
        self.rotatable = rotatable;
        self
    }

    pub fn with_must_stack(mut self, must_stack: bool) -> Self {
        self.must_stack = must_stack;
        self
    }

    pub fn with_self_stack_only(mut self, self_stack_only: bool) -> Self {
        self.self_stack_only = self_stack_only;
        self
    }

    /// Key under which this item's type is grouped: its `type_key`, or its own id when untyped.
    pub fn group_key(&self) -> &str {
        self.type_key.as_deref().unwrap_or(&self.id)
    }

    pub fn footprint_area(&self) -> f64 {
        self.w * self.d
    }

    pub fn volume(&self) -> f64 {
        self.w * self.h * self.d
    }

    /// Candidate floor footprints `(w, d)`: as given, followed by the quarter turn if rotatable.
    pub fn orientations(&self) -> impl Iterator<Item = (f64, f64)> + use<> {
        let turned = self.rotatable.then_some((self.d, self.w));
        std::iter::once((self.w, self.d)).chain(turned)
    }

    /// True if any dimension is too small for the item to occupy space
    pub fn is_degenerate(&self, eps: f64) -> bool {
        self.w <= eps || self.h <= eps || self.d <= eps
    }

    pub fn quantized(&self, grid: f64) -> Item {
        Item {
            w: quantize(self.w, grid),
            h: quantize(self.h, grid),
            d: quantize(self.d, grid),
            ..self.clone()
        }
    }
}
