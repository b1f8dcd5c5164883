use crate::contacts::model::Record;

pub trait ContactsView: Send + Sync {
    /// Полная замена отображаемого списка
    fn set_data(&self, contacts: Vec<Record>);
}
