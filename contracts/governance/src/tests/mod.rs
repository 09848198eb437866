mod test_votes;
