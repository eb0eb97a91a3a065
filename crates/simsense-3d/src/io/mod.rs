/// PointCloud2-style wire message for organized clouds.
pub mod pointcloud2;
