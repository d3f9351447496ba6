mod lane_properties;
mod store_properties;
