/// What an entity form is open for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget<Id> {
    Create,
    Edit(Id),
}

impl<Id: Copy> FormTarget<Id> {
    pub fn id(&self) -> Option<Id> {
        match self {
            FormTarget::Create => None,
            FormTarget::Edit(id) => Some(*id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormTarget::Edit(_))
    }

    /// Modal title, e.g. "Add Equipment" / "Edit Equipment".
    pub fn title(&self, element: &str) -> String {
        match self {
            FormTarget::Create => format!("Add {}", element),
            FormTarget::Edit(_) => format!("Edit {}", element),
        }
    }

    /// Toast after a successful save.
    pub fn saved_message(&self, element: &str) -> String {
        match self {
            FormTarget::Create => format!("{} created successfully", element),
            FormTarget::Edit(_) => format!("{} updated successfully", element),
        }
    }
}

impl<Id: Copy> From<Option<Id>> for FormTarget<Id> {
    fn from(id: Option<Id>) -> Self {
        match id {
            Some(id) => FormTarget::Edit(id),
            None => FormTarget::Create,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let create: FormTarget<i64> = None.into();
        assert_eq!(create.title("Team"), "Add Team");
        assert_eq!(create.saved_message("Team"), "Team created successfully");

        let edit = FormTarget::Edit(4_i64);
        assert!(edit.is_edit());
        assert_eq!(edit.id(), Some(4));
        assert_eq!(edit.saved_message("Technician"), "Technician updated successfully");
    }
}
