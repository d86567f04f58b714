pub(crate) mod edge_fade;
