mod activity;
mod city;
mod complaint;
mod department;
mod zone;
