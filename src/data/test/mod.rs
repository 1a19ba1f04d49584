mod group;
mod semester;
mod sport;
