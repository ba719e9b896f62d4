mod edge_cases;
mod notation;
