mod test_action;
