#[derive(Clone, Debug, PartialEq)]
pub struct SafetyLocation {
    pub name: String,
    pub address: String,
    /// Raw value of the dataset's type column, e.g. `hospital` or `Police Station`.
    pub kind: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Category {
    Hospital,
    Police,
}

impl SafetyLocation {
    /// Lenient matching: the lowercased kind only has to contain the category name. Hospitals win when both match.
    pub fn category_containing(&self) -> Option<Category> {
        let kind = self.kind.to_lowercase();
        if kind.contains("hospital") {
            Some(Category::Hospital)
        } else if kind.contains("police") {
            Some(Category::Police)
        } else {
            None
        }
    }

    /// Strict matching: the kind must equal `hospital` or `police` exactly.
    pub fn category_exact(&self) -> Option<Category> {
        match self.kind.as_str() {
            "hospital" => Some(Category::Hospital),
            "police" => Some(Category::Police),
            _ => None,
        }
    }
}
