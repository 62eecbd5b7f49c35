pub mod mock_contact_sink;
pub mod sequential_ids;

#[allow(unused_imports)]
pub use mock_contact_sink::MockContactSink;
#[allow(unused_imports)]
pub use sequential_ids::SequentialIds;
