// Application layer: concrete pipelines wired from core + domain ports.

pub mod pipelines;
