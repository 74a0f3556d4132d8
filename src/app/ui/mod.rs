mod overlays;
mod panels;
mod sections;
