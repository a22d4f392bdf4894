mod autopilot;
mod entity;
mod layers;
