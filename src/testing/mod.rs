pub(crate) mod brute_force;
