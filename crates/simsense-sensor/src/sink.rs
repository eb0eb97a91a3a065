use simsense_3d::io::pointcloud2::PointCloud2;

/// Error types for the publish sink.
#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    /// Error when the transport rejects a message.
    #[error("Failed to publish point cloud: {0}")]
    Publish(String),
}

/// Outbound transport for serialized point clouds.
///
/// The pipeline hands each assembled message to the sink and forgets it;
/// queueing and backpressure are the transport's concern.
pub trait CloudSink {
    /// Publish one point cloud message.
    fn publish(&mut self, msg: PointCloud2) -> Result<(), SinkError>;
}

/// A sink that buffers published clouds in memory.
///
/// Stands in for a real transport in tests and demos.
#[derive(Debug, Default)]
pub struct MemorySink {
    clouds: Vec<PointCloud2>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// The clouds published so far, in order.
    pub fn clouds(&self) -> &[PointCloud2] {
        &self.clouds
    }
}

impl CloudSink for MemorySink {
    fn publish(&mut self, msg: PointCloud2) -> Result<(), SinkError> {
        self.clouds.push(msg);
        Ok(())
    }
}
