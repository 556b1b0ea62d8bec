mod frames;
mod properties;
