mod tests_node;
