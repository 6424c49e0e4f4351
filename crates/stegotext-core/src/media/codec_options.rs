/// Codec configuration for hiding messages
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Decides what happens when the message does not fit into the carrier
    pub capacity_policy: CapacityPolicy,
}

impl CodecOptions {
    pub fn with_capacity_policy(mut self, capacity_policy: CapacityPolicy) -> Self {
        self.capacity_policy = capacity_policy;
        self
    }
}

/// What to do with a message that is bigger than the carrier capacity
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CapacityPolicy {
    /// Hide as many bits as fit and silently drop the rest.
    /// The message can then not be unveiled anymore, unless the sentinel made it in.
    #[default]
    Truncate,
    /// Fail with `CapacityExceeded` before touching the carrier
    Reject,
}
