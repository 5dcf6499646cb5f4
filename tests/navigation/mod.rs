mod tests_section_ranges;
